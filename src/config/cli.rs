use crate::config::toml_config::TomlConfig;
use crate::domain::ticket::EstimateParams;
use crate::domain::variants::Severity;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TicketKind {
    Bug,
    Request,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "ticket-estimate")]
#[command(about = "Score a support ticket and estimate its resolution time")]
pub struct CliConfig {
    #[arg(long, allow_negative_numbers = true)]
    pub id: i64,

    #[arg(long)]
    pub requester: String,

    /// 1 (low) to 5 (high)
    #[arg(long, allow_negative_numbers = true)]
    pub priority: i32,

    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub days_open: i32,

    #[arg(long, value_enum, default_value = "request")]
    pub kind: TicketKind,

    /// Only used for bug tickets
    #[arg(long, value_enum, default_value = "minor")]
    pub severity: Severity,

    /// Multiplier applied to the base estimate (values below 1 count as 1)
    #[arg(long, allow_negative_numbers = true)]
    pub complexity: Option<i64>,

    /// Extra hours added outside business hours (negative values count as 0)
    #[arg(long, allow_negative_numbers = true)]
    pub after_hours: Option<i64>,

    /// TOML file with estimator defaults
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flags win over the config file, which wins over built-in defaults.
    pub fn estimate_params(&self, file: Option<&TomlConfig>) -> EstimateParams {
        let base = file.map(TomlConfig::estimate_params).unwrap_or_default();
        EstimateParams {
            complexity_factor: self.complexity.unwrap_or(base.complexity_factor),
            after_hours_penalty: self.after_hours.unwrap_or(base.after_hours_penalty),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
