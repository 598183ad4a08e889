//! Configuration for syncpath.
//!
//! The path and range functions take every knob as an explicit argument and
//! never read configuration themselves. This module is a convenience for
//! hosts that want to keep those knobs in one place:
//!
//! 1. Programmatic values (via [`SyncConfigBuilder`])
//! 2. Environment variables (SYNCPATH_*), only when requested
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use syncpath::config::SyncConfigBuilder;
//!
//! let config = SyncConfigBuilder::new()
//!     .part_size(1024)
//!     .build()
//!     .unwrap();
//!
//! let ranges = config.split(2500).unwrap();
//! assert_eq!(ranges.len(), 3);
//! ```

pub mod builder;
pub mod environment;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::SyncConfigBuilder;
pub use environment::EnvironmentConfig;
pub use schema::{SyncConfig, DEFAULT_PART_SIZE};
pub use validator::ConfigValidator;
