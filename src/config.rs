//! Application configuration.
//!
//! Configuration is read once at startup from environment variables (a
//! `.env` file in the working directory is honoured) and may then be
//! overridden by command-line flags.
//!
//! # Environment Variables
//!
//! - `STOCKROOM_DATA_FILE`: snapshot file path (optional, default: `inventory.json`)
//! - `STOCKROOM_LOG`: tracing filter directive (optional, default: `warn`)
//!
//! # Example
//!
//! ```rust
//! use stockroom::config::AppConfig;
//!
//! let config = AppConfig::from_lookup(|key| match key {
//!     "STOCKROOM_DATA_FILE" => Some("/tmp/stock.json".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.data_file.to_str(), Some("/tmp/stock.json"));
//! assert_eq!(config.log_filter, "warn");
//! ```

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the snapshot file.
pub const DATA_FILE_VAR: &str = "STOCKROOM_DATA_FILE";
/// Environment variable holding the tracing filter.
pub const LOG_FILTER_VAR: &str = "STOCKROOM_LOG";

const DEFAULT_DATA_FILE: &str = "inventory.json";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable or flag has an unusable value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the variable or flag.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Runtime configuration of the inventory tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// File holding the catalog snapshot.
    pub data_file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let data_file = non_empty(DATA_FILE_VAR, lookup(DATA_FILE_VAR))?
            .map_or(defaults.data_file, PathBuf::from);
        let log_filter =
            non_empty(LOG_FILTER_VAR, lookup(LOG_FILTER_VAR))?.unwrap_or(defaults.log_filter);
        Ok(Self {
            data_file,
            log_filter,
        })
    }

    /// Replaces fields for which a command-line value was given.
    #[must_use]
    pub fn with_overrides(self, data_file: Option<PathBuf>, log_filter: Option<String>) -> Self {
        Self {
            data_file: data_file.unwrap_or(self.data_file),
            log_filter: log_filter.unwrap_or(self.log_filter),
        }
    }
}

fn non_empty(key: &str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must not be empty".to_string(),
        }),
        other => Ok(other),
    }
}
