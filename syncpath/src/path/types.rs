//! Core types for path handling.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// A slash-delimited path with no empty, `.` or unresolved `..` segments.
///
/// Values are only produced by [`normalize`](super::normalize::normalize), so
/// holding a `CanonicalPath` is proof the string is in canonical form. The
/// root (`"/"`) canonicalizes to the empty string.
///
/// # Examples
///
/// ```
/// use syncpath::path::normalize::normalize;
///
/// let path = normalize("notes\\daily//2024/./today.md").unwrap();
/// assert_eq!(path.as_str(), "notes/daily/2024/today.md");
/// assert_eq!(path.segments().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    pub(crate) fn from_canonical(path: String) -> Self {
        Self(path)
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the root, which canonicalizes to `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncpath::path::normalize::normalize;
    ///
    /// assert!(normalize("/").unwrap().is_root());
    /// assert!(!normalize("/a").unwrap().is_root());
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the path segments, shallowest first.
    ///
    /// The root yields no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for CanonicalPath {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_segments() {
        let root = CanonicalPath::from_canonical(String::new());
        assert!(root.is_root());
        assert_eq!(root.segments().count(), 0);
    }

    #[test]
    fn test_segments_in_order() {
        let path = CanonicalPath::from_canonical("a/b/c.txt".to_string());
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, vec!["a", "b", "c.txt"]);
    }

    #[test]
    fn test_comparisons_and_display() {
        let path = CanonicalPath::from_canonical("a/b".to_string());
        assert_eq!(path, "a/b");
        assert_eq!(format!("{path}"), "a/b");
        assert!(path.starts_with("a/"));
        assert_eq!(String::from(path), "a/b".to_string());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let path = CanonicalPath::from_canonical("x/y".to_string());
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"x/y\"");
    }
}
