pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod platform;
pub mod provider;
mod query;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Installation, Platform, PluginRecord, Snapshot, VersionInfo};
pub use provider::InfoProvider;
