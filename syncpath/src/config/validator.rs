//! Configuration validation.

use crate::config::schema::SyncConfig;
use crate::error::{Error, Result};

/// Validates a [`SyncConfig`] before it is handed out.
///
/// # Examples
///
/// ```
/// use syncpath::config::{ConfigValidator, SyncConfig};
///
/// ConfigValidator::validate(&SyncConfig::default()).unwrap();
///
/// let broken = SyncConfig { part_size: 0, ..Default::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &SyncConfig) -> Result<()> {
        if config.part_size == 0 {
            return Err(Error::Validation {
                field: "part_size".into(),
                message: "must be greater than zero".into(),
            });
        }

        if !(config.hidden.dot || config.hidden.underscore) {
            return Err(Error::Validation {
                field: "hidden".into(),
                message: "at least one of dot or underscore must be enabled".into(),
            });
        }

        Ok(())
    }
}
