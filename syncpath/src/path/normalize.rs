//! Path normalization.
//!
//! Turns user- or remote-supplied path strings into a [`CanonicalPath`]:
//! - Backslashes become forward slashes
//! - Runs of slashes collapse to one
//! - `.` and empty segments are dropped
//! - `..` consumes the preceding segment, or is dropped at the top

use crate::error::{Error, Result};

use super::types::CanonicalPath;

/// Replace every backslash with a forward slash.
///
/// # Examples
///
/// ```
/// use syncpath::path::normalize::unify_separators;
///
/// assert_eq!(unify_separators("a\\b\\c"), "a/b/c");
/// ```
#[must_use]
pub fn unify_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Resolve `.`, `..` and empty segments of a slash-delimited path.
///
/// A `..` with nothing left to consume is dropped rather than kept as a
/// leading `..`.
///
/// # Examples
///
/// ```
/// use syncpath::path::normalize::resolve_segments;
///
/// assert_eq!(resolve_segments("a/./b/../c"), "a/c");
/// assert_eq!(resolve_segments("../../a"), "a");
/// ```
#[must_use]
pub fn resolve_segments(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    stack.join("/")
}

/// Normalize a path to its canonical slash-delimited form.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the path is empty.
///
/// # Examples
///
/// ```
/// use syncpath::path::normalize::normalize;
///
/// assert_eq!(normalize("a//b/./c/../d").unwrap(), "a/b/d");
/// assert_eq!(normalize("../x").unwrap(), "x");
/// assert_eq!(normalize("C:\\vault\\note.md").unwrap(), "C:/vault/note.md");
/// assert!(normalize("").is_err());
/// ```
pub fn normalize(path: &str) -> Result<CanonicalPath> {
    if path.is_empty() {
        return Err(Error::InvalidInput {
            reason: "path must not be empty".to_string(),
        });
    }

    // Splitting already discards the empty pieces left by repeated slashes,
    // so collapsing them happens as part of segment resolution.
    let unified = unify_separators(path);
    Ok(CanonicalPath::from_canonical(resolve_segments(&unified)))
}
