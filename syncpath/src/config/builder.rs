//! Configuration builder.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::SyncConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::HiddenRules;

/// Builder for a validated [`SyncConfig`].
///
/// Environment variables are ignored unless
/// [`with_env_overrides`](Self::with_env_overrides) is called. When they are
/// used, they win over values set programmatically.
///
/// # Examples
///
/// ```
/// use syncpath::config::SyncConfigBuilder;
///
/// let config = SyncConfigBuilder::new()
///     .part_size(8 * 1024 * 1024)
///     .match_underscore(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.part_size, 8 * 1024 * 1024);
/// assert!(!config.hidden.underscore);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncConfigBuilder {
    config: SyncConfig,
    use_env: bool,
}

impl SyncConfigBuilder {
    /// Start from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the part size used for chunked transfers.
    #[must_use]
    pub fn part_size(mut self, bytes: u64) -> Self {
        self.config.part_size = bytes;
        self
    }

    /// Set both hidden rules at once.
    #[must_use]
    pub fn hidden(mut self, rules: HiddenRules) -> Self {
        self.config.hidden = rules;
        self
    }

    /// Toggle matching of `.`-prefixed segments.
    #[must_use]
    pub fn match_dot(mut self, enabled: bool) -> Self {
        self.config.hidden.dot = enabled;
        self
    }

    /// Toggle matching of `_`-prefixed segments.
    #[must_use]
    pub fn match_underscore(mut self, enabled: bool) -> Self {
        self.config.hidden.underscore = enabled;
        self
    }

    /// Return folder levels with a trailing `/`.
    #[must_use]
    pub fn folder_trailing_slash(mut self, enabled: bool) -> Self {
        self.config.folder_trailing_slash = enabled;
        self
    }

    /// Apply SYNCPATH_* environment variables on build.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        self.use_env = true;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override cannot be parsed or the
    /// final configuration fails validation.
    pub fn build(self) -> Result<SyncConfig> {
        let mut config = self.config;

        if self.use_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
