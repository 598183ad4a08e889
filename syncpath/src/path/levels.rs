//! Folder level enumeration.
//!
//! Produces the ancestor directories of a path in the order they have to be
//! created: shallowest first.

/// Returns the proper ancestor folders of `path`, shallowest first.
///
/// The path is split as given, without normalization. The root itself and
/// the final component are never included. A trailing `/` marks `path` as a
/// folder, so its last named component becomes the deepest level. When
/// `trailing_slash` is set every level is returned with a trailing `/`.
///
/// # Examples
///
/// ```
/// use syncpath::path::levels::folder_levels;
///
/// assert_eq!(
///     folder_levels("a/b/c/d/e.txt", false),
///     vec!["a", "a/b", "a/b/c", "a/b/c/d"]
/// );
/// assert_eq!(folder_levels("a/b/c/", false), vec!["a", "a/b", "a/b/c"]);
/// assert_eq!(folder_levels("a/b.md", true), vec!["a/"]);
/// assert!(folder_levels("/", false).is_empty());
/// ```
#[must_use]
pub fn folder_levels(path: &str, trailing_slash: bool) -> Vec<String> {
    if path.is_empty() || path == "/" {
        return Vec::new();
    }

    let segments: Vec<&str> = path.split('/').collect();
    let mut levels = Vec::with_capacity(segments.len().saturating_sub(1));

    for depth in 1..segments.len() {
        let mut level = segments[..depth].join("/");
        if level.is_empty() || level == "/" {
            continue;
        }
        if trailing_slash {
            level.push('/');
        }
        levels.push(level);
    }

    levels
}

/// Returns the 1-based depth of a path.
///
/// One trailing `/` is ignored, so `"a/b/"` and `"a/b"` are both at level 2.
/// Inputs without a meaningful depth (`""`, `"."`, `".."`, or a leading `/`)
/// are still counted but traced at debug level.
///
/// # Examples
///
/// ```
/// use syncpath::path::levels::level_of;
///
/// assert_eq!(level_of("a"), 1);
/// assert_eq!(level_of("a/b/"), 2);
/// assert_eq!(level_of("a/b/c.md"), 3);
/// ```
#[must_use]
pub fn level_of(path: &str) -> usize {
    if matches!(path, "" | "." | "..") || path.starts_with('/') {
        log::debug!("cannot determine a meaningful level for {path:?}");
    }
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed.split('/').count()
}

/// Returns `true` if a folder name contains a character that cannot appear
/// in a single folder component (`?`, `/` or `\`).
///
/// # Examples
///
/// ```
/// use syncpath::path::levels::has_special_char_for_dir;
///
/// assert!(has_special_char_for_dir("what?"));
/// assert!(has_special_char_for_dir("a/b"));
/// assert!(!has_special_char_for_dir("plain name"));
/// ```
#[must_use]
pub fn has_special_char_for_dir(name: &str) -> bool {
    name.contains(['?', '/', '\\'])
}
