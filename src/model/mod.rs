//! Core data types for Qt Creator version and plugin information.
//!
//! - [`VersionInfo`] - Qt Creator's own version string
//! - [`PluginRecord`] - One plugin line from the `-version` output
//! - [`Snapshot`] - Version plus all plugins from a single parse
//! - [`Installation`] - A located executable and its snapshot
//! - [`Platform`] - Operating system platform
//!
//! # Example
//!
//! ```
//! use qtctoys::{PluginRecord, Snapshot, VersionInfo};
//!
//! let snapshot = Snapshot::new(
//!     VersionInfo::new("13.0.1"),
//!     vec![PluginRecord::new("Core", "13.0.1", "Basic IDE functionality")],
//! );
//!
//! assert_eq!(snapshot.plugin_count(), 1);
//! ```

mod installation;
mod snapshot;

pub use installation::*;
pub use snapshot::*;
