//! Storage adapters consumed by the folder materializer.
//!
//! The materializer never touches a filesystem directly. It is handed a
//! [`StorageAdapter`] per call, which keeps the core testable and lets the
//! host plug in whatever backs its vault.

use std::io;

use serde::{Deserialize, Serialize};

pub mod local;
pub mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Kind of entry reported by [`StorageAdapter::stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A folder.
    Folder,
}

/// Metadata for a single storage entry.
///
/// Times are Unix milliseconds. Any field the backend could not report is
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStat {
    /// Whether the entry is a file or a folder.
    pub kind: EntryKind,
    /// Size in bytes.
    pub size: Option<u64>,
    /// Creation time.
    pub ctime: Option<i64>,
    /// Last modification time.
    pub mtime: Option<i64>,
}

impl EntryStat {
    /// Fill in values some backends leave out.
    ///
    /// Folders with an unknown size report a size of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncpath::storage::{EntryKind, EntryStat};
    ///
    /// let stat = EntryStat { kind: EntryKind::Folder, size: None, ctime: None, mtime: None };
    /// assert_eq!(stat.normalized().size, Some(0));
    /// ```
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.kind == EntryKind::Folder && self.size.is_none() {
            self.size = Some(0);
        }
        self
    }
}

/// Trait for the storage primitives the materializer needs.
///
/// Paths are handed over exactly as produced by
/// [`folder_levels`](crate::path::levels::folder_levels). Implementations
/// decide how to map them onto their backend.
///
/// # Examples
///
/// ```
/// use syncpath::storage::{MemoryStorage, StorageAdapter};
///
/// let storage = MemoryStorage::new();
/// assert!(!storage.exists("notes").unwrap());
/// storage.mkdir("notes").unwrap();
/// assert!(storage.exists("notes").unwrap());
/// ```
pub trait StorageAdapter: Send + Sync {
    /// Check whether an entry exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot answer.
    fn exists(&self, path: &str) -> io::Result<bool>;

    /// Create a single folder at `path`.
    ///
    /// Parents are expected to exist already. Implementations should report a
    /// folder that is already present as [`io::ErrorKind::AlreadyExists`].
    ///
    /// # Errors
    ///
    /// Returns an error if the folder could not be created.
    fn mkdir(&self, path: &str) -> io::Result<()>;

    /// Read metadata for `path`, or `None` if nothing is there.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot answer.
    fn stat(&self, path: &str) -> io::Result<Option<EntryStat>>;
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for &S {
    fn exists(&self, path: &str) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn mkdir(&self, path: &str) -> io::Result<()> {
        (**self).mkdir(path)
    }

    fn stat(&self, path: &str) -> io::Result<Option<EntryStat>> {
        (**self).stat(path)
    }
}
