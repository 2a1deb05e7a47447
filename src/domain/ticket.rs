use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_non_empty_string, validate_range};
use serde::Deserialize;

pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 5;

pub const DEFAULT_COMPLEXITY_FACTOR: i64 = 1;
pub const DEFAULT_AFTER_HOURS_PENALTY: i64 = 0;

/// Identity and classification data shared by every ticket kind.
///
/// Fields are private and validated once in [`Ticket::new`], so
/// `1 <= priority <= 5` and `days_open >= 0` hold for every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: i64,
    requester: String,
    priority: i32,
    days_open: i32,
}

/// Tuning inputs for the resolution estimate.
///
/// Values are not validated; the estimator clamps them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EstimateParams {
    #[serde(default = "default_complexity_factor")]
    pub complexity_factor: i64,
    #[serde(default = "default_after_hours_penalty")]
    pub after_hours_penalty: i64,
}

fn default_complexity_factor() -> i64 {
    DEFAULT_COMPLEXITY_FACTOR
}

fn default_after_hours_penalty() -> i64 {
    DEFAULT_AFTER_HOURS_PENALTY
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self {
            complexity_factor: DEFAULT_COMPLEXITY_FACTOR,
            after_hours_penalty: DEFAULT_AFTER_HOURS_PENALTY,
        }
    }
}

impl EstimateParams {
    pub fn new(complexity_factor: i64, after_hours_penalty: i64) -> Self {
        Self {
            complexity_factor,
            after_hours_penalty,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Ticket {
    pub fn new(
        id: i64,
        requester: impl Into<String>,
        priority: i32,
        days_open: i32,
    ) -> Result<Self> {
        let requester = requester.into();

        validate_range("priority", priority, MIN_PRIORITY, MAX_PRIORITY).map_err(|e| {
            tracing::debug!("Rejecting ticket #{}: {}", id, e);
            TicketError::invalid_argument("priority out of range")
        })?;

        if days_open < 0 {
            tracing::debug!("Rejecting ticket #{}: days_open = {}", id, days_open);
            return Err(TicketError::invalid_argument("daysOpen negative"));
        }

        validate_non_empty_string("requester", &requester).map_err(|e| {
            tracing::debug!("Rejecting ticket #{}: {}", id, e);
            TicketError::invalid_argument("requester empty")
        })?;

        Ok(Self {
            id,
            requester,
            priority,
            days_open,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn days_open(&self) -> i32 {
        self.days_open
    }

    /// Hours before escalation pressure: `(6 - priority) * 2 + days_open`.
    pub fn base_hours(&self) -> i64 {
        i64::from(MAX_PRIORITY + 1 - self.priority) * 2 + i64::from(self.days_open)
    }

    /// Estimate with complexity factor 1 and no after-hours penalty.
    pub fn estimate_resolution_hours(&self) -> i64 {
        self.estimate_resolution_hours_with(
            DEFAULT_COMPLEXITY_FACTOR,
            DEFAULT_AFTER_HOURS_PENALTY,
        )
    }

    /// Estimate scaled by `complexity_factor`, without after-hours penalty.
    pub fn estimate_resolution_hours_with_complexity(&self, complexity_factor: i64) -> i64 {
        self.estimate_resolution_hours_with(complexity_factor, DEFAULT_AFTER_HOURS_PENALTY)
    }

    /// Full estimate: `max(1, base * max(1, complexity_factor) + max(0, after_hours_penalty))`.
    ///
    /// Never fails. A complexity factor below 1 counts as 1 and a negative
    /// penalty counts as 0. Arithmetic saturates at `i64::MAX`.
    pub fn estimate_resolution_hours_with(
        &self,
        complexity_factor: i64,
        after_hours_penalty: i64,
    ) -> i64 {
        let effective_complexity = complexity_factor.max(1);
        let effective_penalty = after_hours_penalty.max(0);

        if effective_complexity != complexity_factor || effective_penalty != after_hours_penalty {
            tracing::debug!(
                "Ticket #{}: clamped complexity {} -> {}, penalty {} -> {}",
                self.id,
                complexity_factor,
                effective_complexity,
                after_hours_penalty,
                effective_penalty
            );
        }

        self.base_hours()
            .saturating_mul(effective_complexity)
            .saturating_add(effective_penalty)
            .max(1)
    }

    pub fn estimate(&self, params: EstimateParams) -> i64 {
        self.estimate_resolution_hours_with(params.complexity_factor, params.after_hours_penalty)
    }
}
