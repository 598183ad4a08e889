#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # syncpath
//!
//! Path and chunking primitives for file synchronization engines.
//!
//! This library turns arbitrary path strings into one canonical form, works
//! out which folders must exist before a file can be written (and creates
//! them through a pluggable storage adapter), and splits large files into
//! numbered byte ranges for chunked transfer.
//!
//! ## Core Operations
//!
//! - [`normalize`]: canonical slash-delimited paths
//! - [`is_hidden`]: `.`/`_` prefixed segment detection
//! - [`dirname`]: parent of a path, without resolving `..`
//! - [`folder_levels`]: ancestor folders, shallowest first
//! - [`ensure_ancestors`]: create missing ancestors through a [`StorageAdapter`]
//! - [`split_ranges`]: contiguous [`SplitRange`] parts of a byte stream
//!
//! ## Examples
//!
//! ```
//! use syncpath::{ensure_ancestors, normalize, split_ranges, MemoryStorage};
//!
//! let path = normalize("Vault\\Notes//./2024/plan.md").unwrap();
//! assert_eq!(path, "Vault/Notes/2024/plan.md");
//!
//! let storage = MemoryStorage::new();
//! let report = ensure_ancestors(&path, &storage).unwrap();
//! assert_eq!(report.created, vec!["Vault", "Vault/Notes", "Vault/Notes/2024"]);
//!
//! let parts = split_ranges(10, 4).unwrap();
//! assert_eq!(parts.len(), 3);
//! assert_eq!(parts[2].end, 10);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod materialize;
pub mod path;
pub mod range;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{SyncConfig, SyncConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use materialize::{ensure_ancestors, stat_entry, MaterializeReport};
pub use path::dirname::{dirname, path_folder};
pub use path::hidden::is_hidden;
pub use path::levels::folder_levels;
pub use path::normalize::normalize;
pub use path::{CanonicalPath, HiddenRules};
pub use range::{split_ranges, SplitRange};
pub use storage::{EntryKind, EntryStat, LocalStorage, MemoryStorage, StorageAdapter};
