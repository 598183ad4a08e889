//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::levels::folder_levels;
use crate::path::HiddenRules;
use crate::range::{split_ranges, SplitRange};

/// Part size used when nothing else is configured (5 MiB).
///
/// This is the smallest part most S3-compatible multipart APIs accept.
pub const DEFAULT_PART_SIZE: u64 = 5 * 1024 * 1024;

/// Tunable knobs a sync engine passes into the core.
///
/// The free functions in this crate never read a `SyncConfig` on their own;
/// this struct only bundles the arguments a host would otherwise repeat on
/// every call. Missing fields deserialize to their defaults, so the struct
/// can be embedded in a host's own settings.
///
/// # Examples
///
/// ```
/// use syncpath::config::SyncConfig;
///
/// let config = SyncConfig { part_size: 4, ..Default::default() };
/// assert_eq!(config.split(10).unwrap().len(), 3);
/// assert!(config.is_hidden("_templates/daily.md").unwrap());
/// assert_eq!(config.folder_levels("a/b/c.md"), vec!["a", "a/b"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Bytes per part when splitting a file for chunked transfer.
    pub part_size: u64,

    /// Which segment prefixes mark a path as hidden.
    pub hidden: HiddenRules,

    /// Return folder levels with a trailing `/`.
    pub folder_trailing_slash: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            part_size: DEFAULT_PART_SIZE,
            hidden: HiddenRules::default(),
            folder_trailing_slash: false,
        }
    }
}

impl SyncConfig {
    /// Split a stream of `bytes_total` bytes using the configured part size.
    ///
    /// # Errors
    ///
    /// Returns an error if the part size is zero.
    pub fn split(&self, bytes_total: u64) -> Result<Vec<SplitRange>> {
        split_ranges(bytes_total, self.part_size)
    }

    /// Classify a path using the configured hidden rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or both hidden rules are off.
    pub fn is_hidden(&self, path: &str) -> Result<bool> {
        self.hidden.is_hidden(path)
    }

    /// Enumerate folder levels honoring the trailing slash setting.
    #[must_use]
    pub fn folder_levels(&self, path: &str) -> Vec<String> {
        folder_levels(path, self.folder_trailing_slash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SyncConfig::default();
        assert_eq!(config.part_size, DEFAULT_PART_SIZE);
        assert!(config.hidden.dot);
        assert!(config.hidden.underscore);
        assert!(!config.folder_trailing_slash);
    }

    #[test]
    fn test_split_uses_part_size() {
        let config = SyncConfig {
            part_size: 3,
            ..Default::default()
        };
        let ranges = config.split(10).unwrap();
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[3].end, 10);
    }

    #[test]
    fn test_default_part_size_single_part_for_small_files() {
        let ranges = SyncConfig::default().split(1024).unwrap();
        assert_eq!(ranges.len(), 1);
    }

    #[test]
    fn test_folder_levels_trailing_slash() {
        let config = SyncConfig {
            folder_trailing_slash: true,
            ..Default::default()
        };
        assert_eq!(config.folder_levels("a/b/c.md"), vec!["a/", "a/b/"]);
    }

    #[test]
    fn test_hidden_rules_applied() {
        let config = SyncConfig {
            hidden: HiddenRules {
                dot: true,
                underscore: false,
            },
            ..Default::default()
        };
        assert!(!config.is_hidden("_attachments/a.png").unwrap());
        assert!(config.is_hidden(".obsidian/app.json").unwrap());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: SyncConfig = serde_json::from_str(r#"{"part_size": 1024}"#).unwrap();
        assert_eq!(config.part_size, 1024);
        assert_eq!(config.hidden, HiddenRules::default());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: std::result::Result<SyncConfig, _> =
            serde_json::from_str(r#"{"chunk": 1024}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = SyncConfig {
            part_size: 8,
            hidden: HiddenRules {
                dot: false,
                underscore: true,
            },
            folder_trailing_slash: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SyncConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
