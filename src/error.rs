//! Error type shared by the parser, the query layer and the info provider.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, invoking or interpreting Qt Creator.
///
/// Every variant is terminal for the operation that produced it. None of
/// them are retried: they describe the state of the local installation,
/// which does not change between immediate attempts.
#[derive(Debug, Error)]
pub enum Error {
    /// No candidate path pointed at an existing executable.
    #[error("could not find Qt Creator (searched {} location(s))", .searched.len())]
    ExecutableNotFound { searched: Vec<PathBuf> },

    /// The executable could not be spawned or exited unsuccessfully.
    #[error("error when requesting version from {}: {reason}", .path.display())]
    InvocationFailed { path: PathBuf, reason: String },

    /// The output carried no usable `Qt Creator <version>` banner.
    #[error("could not determine Qt Creator version")]
    VersionNotFound,

    /// Neither an exact nor a case-insensitive match exists.
    ///
    /// `suggestions` holds the names containing the requested term.
    #[error("plugin '{name}' not found")]
    PluginNotFound {
        name: String,
        suggestions: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
