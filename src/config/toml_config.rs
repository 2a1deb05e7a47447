use crate::domain::ticket::EstimateParams;
use crate::utils::error::{Result, TicketError};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{validate_one_of, Validate};
use serde::Deserialize;
use std::path::Path;

/// Estimator defaults loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub estimation: EstimateParams,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TicketError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`. Unset variables are an error.
    /// Comments are copied through untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| TicketError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let mut output = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            let (value, comment) = split_comment(line);
            let substituted = re.replace_all(value, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    missing.push(var_name.to_string());
                    String::new()
                })
            });
            output.push_str(&substituted);
            output.push_str(comment);
        }

        if !missing.is_empty() {
            return Err(TicketError::ConfigError {
                message: format!("Unset environment variables: {}", missing.join(", ")),
            });
        }

        Ok(output)
    }

    pub fn estimate_params(&self) -> EstimateParams {
        self.estimation
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

/// Splits a line at the first `#` outside a quoted string.
/// Multi-line strings are not tracked across lines.
fn split_comment(line: &str) -> (&str, &str) {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => return line.split_at(i),
            None => {}
        }
    }

    (line, "")
}

impl Validate for TomlConfig {
    // Estimation values are clamped by the estimator and are not checked here.
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}
