//! Path handling for sync engines.
//!
//! Every path a sync engine sees, whether typed by a user, listed by a
//! remote, or read from a local vault, goes through this module before it is
//! compared, classified or created.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize`](normalize::normalize) converts a path to a
//! [`CanonicalPath`] by:
//! - Converting backslashes to forward slashes
//! - Collapsing repeated slashes
//! - Dropping `.` segments
//! - Resolving `..` against the preceding segment (excess `..` is dropped)
//!
//! ## Hidden paths
//!
//! A path is hidden if any segment starts with `.` or `_`, each prefix
//! toggled through [`HiddenRules`].
//!
//! ## Parents and levels
//!
//! [`dirname`](dirname::dirname) and
//! [`folder_levels`](levels::folder_levels) work on the path exactly as
//! written. They only split on `/` and never resolve `..`, so the folders
//! they name are the ones the caller asked for.
//!
//! # Examples
//!
//! ```
//! use syncpath::path::{dirname::dirname, levels::folder_levels, normalize::normalize};
//!
//! let path = normalize("Notes\\2024//./March/../April/plan.md").unwrap();
//! assert_eq!(path, "Notes/2024/April/plan.md");
//! assert_eq!(dirname(&path), "Notes/2024/April");
//! assert_eq!(
//!     folder_levels(&path, false),
//!     vec!["Notes", "Notes/2024", "Notes/2024/April"]
//! );
//! ```

pub mod dirname;
pub mod hidden;
pub mod levels;
pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use hidden::HiddenRules;
pub use types::CanonicalPath;
