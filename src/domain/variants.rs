use crate::domain::ports::UrgencyScorable;
use crate::domain::ticket::Ticket;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl Severity {
    fn weight(self) -> i64 {
        match self {
            Severity::Minor => 0,
            Severity::Major => 15,
            Severity::Critical => 30,
        }
    }
}

/// A defect report. Severity adds a fixed bump on top of priority and age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugTicket {
    ticket: Ticket,
    severity: Severity,
}

impl BugTicket {
    pub fn new(
        id: i64,
        requester: impl Into<String>,
        priority: i32,
        days_open: i32,
        severity: Severity,
    ) -> Result<Self> {
        Ok(Self {
            ticket: Ticket::new(id, requester, priority, days_open)?,
            severity,
        })
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl UrgencyScorable for BugTicket {
    fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    fn urgency_score(&self) -> i64 {
        i64::from(self.ticket.priority())
            .saturating_mul(10)
            .saturating_add(i64::from(self.ticket.days_open()).saturating_mul(2))
            .saturating_add(self.severity.weight())
    }
}

impl fmt::Display for BugTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// A service request. Urgency grows with priority and, more slowly, with age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    ticket: Ticket,
}

impl RequestTicket {
    pub fn new(
        id: i64,
        requester: impl Into<String>,
        priority: i32,
        days_open: i32,
    ) -> Result<Self> {
        Ok(Self {
            ticket: Ticket::new(id, requester, priority, days_open)?,
        })
    }
}

impl UrgencyScorable for RequestTicket {
    fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    fn urgency_score(&self) -> i64 {
        i64::from(self.ticket.priority())
            .saturating_mul(5)
            .saturating_add(i64::from(self.ticket.days_open()))
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
