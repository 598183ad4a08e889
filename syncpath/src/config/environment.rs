//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SYNCPATH_* environment variables. They
//! are only consulted when a host opts in through
//! [`SyncConfigBuilder::with_env_overrides`](super::SyncConfigBuilder::with_env_overrides).

use std::env;

use crate::config::schema::SyncConfig;
use crate::error::{Error, Result};

/// Overrides `part_size`.
pub const ENV_PART_SIZE: &str = "SYNCPATH_PART_SIZE";
/// Overrides `hidden.dot`.
pub const ENV_HIDDEN_DOT: &str = "SYNCPATH_HIDDEN_DOT";
/// Overrides `hidden.underscore`.
pub const ENV_HIDDEN_UNDERSCORE: &str = "SYNCPATH_HIDDEN_UNDERSCORE";
/// Overrides `folder_trailing_slash`.
pub const ENV_FOLDER_TRAILING_SLASH: &str = "SYNCPATH_FOLDER_TRAILING_SLASH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use syncpath::config::{EnvironmentConfig, SyncConfig};
///
/// let mut config = SyncConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric part size, invalid boolean).
    pub fn apply_overrides(config: &mut SyncConfig) -> Result<()> {
        if let Ok(val) = env::var(ENV_PART_SIZE) {
            config.part_size = val.trim().parse().map_err(|_| Error::Validation {
                field: ENV_PART_SIZE.into(),
                message: format!("Must be a non-negative integer, got '{val}'"),
            })?;
        }

        if let Ok(val) = env::var(ENV_HIDDEN_DOT) {
            config.hidden.dot = Self::parse_bool(ENV_HIDDEN_DOT, &val)?;
        }

        if let Ok(val) = env::var(ENV_HIDDEN_UNDERSCORE) {
            config.hidden.underscore = Self::parse_bool(ENV_HIDDEN_UNDERSCORE, &val)?;
        }

        if let Ok(val) = env::var(ENV_FOLDER_TRAILING_SLASH) {
            config.folder_trailing_slash = Self::parse_bool(ENV_FOLDER_TRAILING_SLASH, &val)?;
        }

        Ok(())
    }

    /// Parse a boolean from common textual forms.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: '{s}' (expected true/false/1/0/yes/no)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepted_forms() {
        for value in ["true", "TRUE", "1", "yes", " Yes "] {
            let parsed = EnvironmentConfig::parse_bool("X", value).unwrap();
            assert!(parsed, "{value}");
        }
        for value in ["false", "False", "0", "no"] {
            let parsed = EnvironmentConfig::parse_bool("X", value).unwrap();
            assert!(!parsed, "{value}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let result = EnvironmentConfig::parse_bool(ENV_HIDDEN_DOT, "maybe");
        let display = result.unwrap_err().to_string();
        assert!(display.contains("SYNCPATH_HIDDEN_DOT"));
        assert!(display.contains("maybe"));
    }
}
