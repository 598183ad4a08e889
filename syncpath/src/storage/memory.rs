//! In-memory storage adapter.
//!
//! Behaves like a strict filesystem: a folder can only be created once its
//! parent exists, and creating an existing folder fails with
//! [`io::ErrorKind::AlreadyExists`]. A trailing `/` names the same folder,
//! so `"a/"` and `"a"` are one entry.

use std::collections::BTreeSet;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{EntryKind, EntryStat, StorageAdapter};
use crate::path::dirname::dirname;

/// Storage adapter that keeps folders in memory.
///
/// Useful for dry runs and tests. All operations go through an internal
/// mutex, so the adapter can be shared across threads.
///
/// # Examples
///
/// ```
/// use syncpath::storage::{MemoryStorage, StorageAdapter};
///
/// let storage = MemoryStorage::new();
/// storage.mkdir("a").unwrap();
/// storage.mkdir("a/b").unwrap();
/// assert!(storage.mkdir("x/y").is_err()); // parent missing
/// assert_eq!(storage.folders(), vec!["a", "a/b"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    folders: Mutex<BTreeSet<String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds the given folders.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncpath::storage::{MemoryStorage, StorageAdapter};
    ///
    /// let storage = MemoryStorage::with_folders(["a", "a/b"]);
    /// assert!(storage.exists("a/b").unwrap());
    /// ```
    #[must_use]
    pub fn with_folders<I, S>(folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            folders: Mutex::new(folders.into_iter().map(Into::into).collect()),
        }
    }

    /// Snapshot of the folders currently held, in sorted order.
    #[must_use]
    pub fn folders(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    // Every mutation is a single insert, so a poisoned set is still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.folders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn folder_key(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

impl StorageAdapter for MemoryStorage {
    fn exists(&self, path: &str) -> io::Result<bool> {
        Ok(self.lock().contains(folder_key(path)))
    }

    fn mkdir(&self, path: &str) -> io::Result<()> {
        let path = folder_key(path);
        let mut folders = self.lock();

        if folders.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("folder already exists: {path}"),
            ));
        }

        let parent = dirname(path);
        if parent != "/" && !folders.contains(&parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent folder missing: {parent}"),
            ));
        }

        folders.insert(path.to_string());
        Ok(())
    }

    fn stat(&self, path: &str) -> io::Result<Option<EntryStat>> {
        let stat = self.lock().contains(folder_key(path)).then_some(EntryStat {
            kind: EntryKind::Folder,
            size: None,
            ctime: None,
            mtime: None,
        });
        Ok(stat)
    }
}
