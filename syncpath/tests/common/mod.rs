//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! syncpath library.

use std::io;
use std::path::Path;

use mockall::mock;
use syncpath::{EntryStat, LocalStorage, StorageAdapter};

mock! {
    /// Storage adapter whose calls are set up per test.
    pub Storage {}

    impl StorageAdapter for Storage {
        fn exists(&self, path: &str) -> io::Result<bool>;
        fn mkdir(&self, path: &str) -> io::Result<()>;
        fn stat(&self, path: &str) -> io::Result<Option<EntryStat>>;
    }
}

/// Creates a temporary directory and a [`LocalStorage`] rooted in it.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_local_storage() -> (tempfile::TempDir, LocalStorage) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let storage = LocalStorage::new(dir.path());
    (dir, storage)
}

/// Returns `true` if `rel` is a directory under `root`.
#[allow(dead_code)]
pub fn is_dir(root: &Path, rel: &str) -> bool {
    root.join(rel).is_dir()
}

/// An `io::Error` of the given kind, for scripted failures.
#[allow(dead_code)]
pub fn io_error(kind: io::ErrorKind) -> io::Error {
    io::Error::new(kind, format!("scripted {kind:?}"))
}
