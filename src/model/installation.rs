use std::path::PathBuf;

use super::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "linux")]
        return Platform::Linux;
        #[cfg(target_os = "macos")]
        return Platform::MacOS;
        #[cfg(target_os = "windows")]
        return Platform::Windows;
    }
}

/// A located Qt Creator executable together with what it reported.
#[derive(Debug, Clone)]
pub struct Installation {
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

impl Installation {
    pub fn new(path: PathBuf, snapshot: Snapshot) -> Self {
        Self { path, snapshot }
    }
}
