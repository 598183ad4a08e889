//! Hidden path classification.
//!
//! A path is hidden when any of its segments starts with `.` or `_`, with
//! each prefix switchable independently.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::normalize::normalize;

/// Which segment prefixes mark a path as hidden.
///
/// # Examples
///
/// ```
/// use syncpath::path::HiddenRules;
///
/// let rules = HiddenRules::default();
/// assert!(rules.is_hidden(".obsidian/workspace.json").unwrap());
/// assert!(rules.is_hidden("notes/_drafts/idea.md").unwrap());
/// assert!(!rules.is_hidden("notes/idea.md").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenRules {
    /// Treat segments starting with `.` as hidden.
    pub dot: bool,
    /// Treat segments starting with `_` as hidden.
    pub underscore: bool,
}

impl Default for HiddenRules {
    fn default() -> Self {
        Self {
            dot: true,
            underscore: true,
        }
    }
}

impl HiddenRules {
    /// Classify a path with these rules.
    ///
    /// # Errors
    ///
    /// See [`is_hidden`].
    pub fn is_hidden(&self, path: &str) -> Result<bool> {
        is_hidden(path, self.dot, self.underscore)
    }
}

/// Returns `true` if any segment of `path` starts with a hidden prefix.
///
/// The path is normalized first; `.`, `..` and empty segments are never
/// matched.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if both `match_dot` and
/// `match_underscore` are false, and [`Error::InvalidInput`] if the path is
/// empty.
///
/// # Examples
///
/// ```
/// use syncpath::path::hidden::is_hidden;
///
/// assert!(is_hidden(".git/config", true, true).unwrap());
/// assert!(is_hidden("a/b/.c", true, true).unwrap());
/// assert!(!is_hidden("a/b/c", true, true).unwrap());
/// assert!(!is_hidden("_attachments/x.png", true, false).unwrap());
/// assert!(is_hidden("a/b/c", false, false).is_err());
/// ```
pub fn is_hidden(path: &str, match_dot: bool, match_underscore: bool) -> Result<bool> {
    if !(match_dot || match_underscore) {
        return Err(Error::InvalidArgument {
            argument: "match_dot/match_underscore",
            reason: "at least one hidden prefix must be enabled".to_string(),
        });
    }

    let normalized = normalize(path)?;
    for segment in normalized.split('/') {
        if matches!(segment, "" | "." | "..") {
            continue;
        }
        if match_dot && segment.starts_with('.') {
            return Ok(true);
        }
        if match_underscore && segment.starts_with('_') {
            return Ok(true);
        }
    }

    Ok(false)
}
