//! Session configuration.
//!
//! # Responsibility
//! - Carry the store location, report limit and logging options for one session.
//! - Reject configurations that cannot produce a usable session.
//!
//! # Invariants
//! - `store_path` is never empty after `validate()`.
//! - `report_limit` is at least `1` after `validate()`.

use crate::logging::default_log_level;
use crate::report::DEFAULT_REPORT_LIMIT;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Store file used when the caller does not pick one.
pub const DEFAULT_STORE_PATH: &str = ".todos.json";

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyStorePath,
    ZeroReportLimit,
    /// Store path is not valid UTF-8 and cannot be used as a locator.
    NonUtf8StorePath(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStorePath => write!(f, "store path cannot be empty"),
            Self::ZeroReportLimit => write!(f, "report limit must be at least 1"),
            Self::NonUtf8StorePath(path) => {
                write!(f, "store path `{}` is not valid UTF-8", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Options for a `TodoService` session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    pub store_path: PathBuf,
    pub report_limit: usize,
    pub log_level: String,
    /// Absolute log directory. `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            report_limit: DEFAULT_REPORT_LIMIT,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl TodoConfig {
    /// Default config pointing at `store_path`.
    pub fn with_store_path(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store_locator()?;
        if self.report_limit == 0 {
            return Err(ConfigError::ZeroReportLimit);
        }
        Ok(())
    }

    /// Store path as a resource locator string.
    pub fn store_locator(&self) -> Result<&str, ConfigError> {
        let locator = self
            .store_path
            .to_str()
            .ok_or_else(|| ConfigError::NonUtf8StorePath(self.store_path.clone()))?;
        if locator.trim().is_empty() {
            return Err(ConfigError::EmptyStorePath);
        }
        Ok(locator)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TodoConfig, DEFAULT_STORE_PATH};

    #[test]
    fn default_config_is_valid() {
        let config = TodoConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.store_locator().unwrap(), DEFAULT_STORE_PATH);
        assert_eq!(config.report_limit, 40);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn rejects_empty_path_and_zero_limit() {
        let empty = TodoConfig::with_store_path("  ");
        assert_eq!(empty.validate().unwrap_err(), ConfigError::EmptyStorePath);

        let zero = TodoConfig {
            report_limit: 0,
            ..TodoConfig::default()
        };
        assert_eq!(zero.validate().unwrap_err(), ConfigError::ZeroReportLimit);
    }
}
