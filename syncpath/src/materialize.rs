//! Folder materialization.
//!
//! Before a file can be written, every folder above it has to exist. This
//! module walks the ancestor list from [`folder_levels`] and creates whatever
//! is missing through a [`StorageAdapter`].
//!
//! Materialization is best effort and not transactional: if a level fails,
//! the levels created before it stay in place and the error names the level
//! that failed, so the caller can retry just that one.

use std::io;

use crate::error::{Error, Result};
use crate::path::levels::folder_levels;
use crate::storage::{EntryStat, StorageAdapter};

/// What a call to [`ensure_ancestors`] did, level by level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Levels created by this call, shallowest first.
    pub created: Vec<String>,
    /// Levels that were already present, including ones another writer
    /// created between the existence check and the mkdir.
    pub existing: Vec<String>,
}

impl MaterializeReport {
    /// Total number of levels visited.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.created.len() + self.existing.len()
    }

    /// Returns `true` if nothing had to be created.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Ensure every ancestor folder of `path` exists, creating missing ones in
/// order from shallowest to deepest.
///
/// Levels are visited one after another; a level is only created after the
/// existence check for it reports `false`. A create that fails with
/// [`io::ErrorKind::AlreadyExists`] means another writer got there first and
/// counts as success.
///
/// # Errors
///
/// Returns [`Error::Storage`] carrying the failing level if an existence
/// check or a create fails for any other reason. Levels created before the
/// failure are left in place.
///
/// # Examples
///
/// ```
/// use syncpath::materialize::ensure_ancestors;
/// use syncpath::storage::MemoryStorage;
///
/// let storage = MemoryStorage::with_folders(["a"]);
/// let report = ensure_ancestors("a/b/c/d.txt", &storage).unwrap();
///
/// assert_eq!(report.created, vec!["a/b", "a/b/c"]);
/// assert_eq!(report.existing, vec!["a"]);
/// assert_eq!(storage.folders(), vec!["a", "a/b", "a/b/c"]);
/// ```
pub fn ensure_ancestors<S>(path: &str, storage: &S) -> Result<MaterializeReport>
where
    S: StorageAdapter + ?Sized,
{
    let mut report = MaterializeReport::default();

    for level in folder_levels(path, false) {
        let exists = storage
            .exists(&level)
            .map_err(|e| Error::storage(&level, e))?;

        if exists {
            report.existing.push(level);
            continue;
        }

        match storage.mkdir(&level) {
            Ok(()) => {
                log::debug!("created folder {level}");
                report.created.push(level);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("folder {level} appeared concurrently");
                report.existing.push(level);
            }
            Err(e) => return Err(Error::storage(&level, e)),
        }
    }

    Ok(report)
}

/// Read metadata for `path` through the adapter, with missing folder sizes
/// filled in.
///
/// # Errors
///
/// Returns [`Error::Storage`] if the adapter fails.
///
/// # Examples
///
/// ```
/// use syncpath::materialize::stat_entry;
/// use syncpath::storage::MemoryStorage;
///
/// let storage = MemoryStorage::with_folders(["a"]);
/// let stat = stat_entry("a", &storage).unwrap().unwrap();
/// assert_eq!(stat.size, Some(0));
/// assert!(stat_entry("b", &storage).unwrap().is_none());
/// ```
pub fn stat_entry<S>(path: &str, storage: &S) -> Result<Option<EntryStat>>
where
    S: StorageAdapter + ?Sized,
{
    let stat = storage.stat(path).map_err(|e| Error::storage(path, e))?;
    Ok(stat.map(EntryStat::normalized))
}
