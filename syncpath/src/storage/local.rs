//! Local filesystem storage adapter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{EntryKind, EntryStat, StorageAdapter};
use crate::path::normalize::{resolve_segments, unify_separators};

/// Storage adapter backed by a directory on the local filesystem.
///
/// Sync paths are resolved under `root` and never above it. Leading slashes
/// are stripped, so `"/a/b"` and `"a/b"` name the same folder, and a `..`
/// with nothing left to consume is dropped. Folders are created one level
/// at a time, which means a missing parent or a concurrent creator shows up
/// as a real [`io::Error`] instead of being papered over.
///
/// # Examples
///
/// ```no_run
/// use syncpath::storage::{LocalStorage, StorageAdapter};
///
/// let storage = LocalStorage::new("/srv/vault");
/// if !storage.exists("notes").unwrap() {
///     storage.mkdir("notes").unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create an adapter rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory sync paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a sync path onto the local filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncpath::storage::LocalStorage;
    /// use std::path::Path;
    ///
    /// let storage = LocalStorage::new("/vault");
    /// assert_eq!(storage.resolve("/a/b"), Path::new("/vault/a/b"));
    /// assert_eq!(storage.resolve("a/b/"), Path::new("/vault/a/b"));
    /// assert_eq!(storage.resolve("a/../../etc"), Path::new("/vault/etc"));
    /// ```
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.clone();
        let relative = resolve_segments(&unify_separators(path));
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            resolved.push(segment);
        }
        resolved
    }
}

impl StorageAdapter for LocalStorage {
    fn exists(&self, path: &str) -> io::Result<bool> {
        self.resolve(path).try_exists()
    }

    fn mkdir(&self, path: &str) -> io::Result<()> {
        fs::create_dir(self.resolve(path))
    }

    fn stat(&self, path: &str) -> io::Result<Option<EntryStat>> {
        let metadata = match fs::metadata(self.resolve(path)) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let kind = if metadata.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        };
        // Folder sizes are filesystem-specific block counts, not content sizes.
        let size = (kind == EntryKind::File).then(|| metadata.len());

        Ok(Some(EntryStat {
            kind,
            size,
            ctime: metadata.created().ok().and_then(unix_millis),
            mtime: metadata.modified().ok().and_then(unix_millis),
        }))
    }
}

fn unix_millis(time: SystemTime) -> Option<i64> {
    let millis = time
        .duration_since(SystemTime::UNIX_EPOCH)
        .ok()?
        .as_millis();
    i64::try_from(millis).ok()
}
