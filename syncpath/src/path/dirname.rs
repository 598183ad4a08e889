//! Parent directory helpers.
//!
//! These only unify separators and drop the last component. They never
//! resolve `.` or `..`, so the parent of a not-yet-existing path keeps the
//! shape the caller wrote.

use super::normalize::unify_separators;

/// Returns the parent of `path`, or `"/"` at the top.
///
/// # Examples
///
/// ```
/// use syncpath::path::dirname::dirname;
///
/// assert_eq!(dirname("a/b/c.txt"), "a/b");
/// assert_eq!(dirname("a\\b\\c.txt"), "a/b");
/// assert_eq!(dirname("a/../b"), "a/..");
/// assert_eq!(dirname("c.txt"), "/");
/// assert_eq!(dirname("/c.txt"), "/");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    let unified = unify_separators(path);
    let parent = match unified.rfind('/') {
        Some(idx) => &unified[..idx],
        None => "",
    };

    if matches!(parent, "" | "/" | ".") {
        return "/".to_string();
    }
    parent.to_string()
}

/// Returns the folder a path lives in, with a trailing `/`.
///
/// A path already ending in `/` names a folder and is returned unchanged.
///
/// # Examples
///
/// ```
/// use syncpath::path::dirname::path_folder;
///
/// assert_eq!(path_folder("a/b/"), "a/b/");
/// assert_eq!(path_folder("a/b.txt"), "a/");
/// assert_eq!(path_folder("b.txt"), "/");
/// ```
#[must_use]
pub fn path_folder(path: &str) -> String {
    if path.ends_with('/') {
        return path.to_string();
    }
    with_trailing_slash(dirname(path))
}

fn with_trailing_slash(mut folder: String) -> String {
    if !folder.ends_with('/') {
        folder.push('/');
    }
    folder
}
