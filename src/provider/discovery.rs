use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::qtcreator_candidates;
use std::path::PathBuf;
use tracing::debug;

/// An ordered list of places Qt Creator might be installed.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    candidates: Vec<PathBuf>,
}

impl Discovery {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Probes only the given executable.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self::new(vec![path.into()])
    }

    /// Configured search paths followed by the platform defaults, or only
    /// the configured executable when one is set.
    pub fn from_config(config: &Config) -> Self {
        if let Some(executable) = &config.executable {
            return Self::explicit(executable.clone());
        }

        let mut candidates = config.search_paths.clone();
        candidates.extend(qtcreator_candidates());
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that is an existing file.
    pub fn locate(&self) -> Result<PathBuf> {
        for candidate in &self.candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found Qt Creator");
                return Ok(candidate.clone());
            }
            debug!(path = %candidate.display(), "no Qt Creator at candidate path");
        }

        Err(Error::ExecutableNotFound {
            searched: self.candidates.clone(),
        })
    }
}
