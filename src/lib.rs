pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, TicketKind};
pub use config::TomlConfig;

pub use domain::{
    ports::UrgencyScorable,
    ticket::{EstimateParams, Ticket},
    variants::{BugTicket, RequestTicket, Severity},
};
pub use utils::error::{Result, TicketError};
