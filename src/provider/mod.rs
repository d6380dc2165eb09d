//! Locating, invoking and parsing a Qt Creator installation.
//!
//! [`InfoProvider`] ties the pieces together:
//!
//! 1. [`Discovery`] picks the first existing executable path
//! 2. a [`CommandRunner`] runs it with the version flag
//! 3. [`parser::parse`](crate::parser::parse) turns the output into a
//!    [`Snapshot`](crate::Snapshot)
//!
//! # Example
//!
//! ```no_run
//! use qtctoys::provider::InfoProvider;
//!
//! fn main() -> qtctoys::Result<()> {
//!     let provider: InfoProvider = InfoProvider::default();
//!     let installation = provider.fetch()?;
//!
//!     println!("Qt Creator {} at {}",
//!         installation.snapshot.version(),
//!         installation.path.display());
//!     Ok(())
//! }
//! ```

mod discovery;
mod runner;

pub use discovery::Discovery;
pub use runner::{CommandRunner, SystemRunner};

use crate::config::Config;
use crate::error::Result;
use crate::model::Installation;
use crate::parser;
use tracing::info;

pub const DEFAULT_VERSION_FLAG: &str = "-version";

/// Produces a fresh [`Installation`] on every call; nothing is cached.
pub struct InfoProvider<R = SystemRunner> {
    discovery: Discovery,
    runner: R,
    version_flag: String,
}

impl InfoProvider<SystemRunner> {
    pub fn new(discovery: Discovery) -> Self {
        Self::with_runner(discovery, SystemRunner)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Discovery::from_config(config)).with_version_flag(&config.version_flag)
    }
}

impl Default for InfoProvider<SystemRunner> {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl<R: CommandRunner> InfoProvider<R> {
    pub fn with_runner(discovery: Discovery, runner: R) -> Self {
        Self {
            discovery,
            runner,
            version_flag: DEFAULT_VERSION_FLAG.to_string(),
        }
    }

    pub fn with_version_flag(mut self, flag: impl Into<String>) -> Self {
        self.version_flag = flag.into();
        self
    }

    /// Locates Qt Creator, runs it and parses what it printed.
    ///
    /// # Errors
    ///
    /// - [`Error::ExecutableNotFound`](crate::Error::ExecutableNotFound) if no candidate exists
    /// - [`Error::InvocationFailed`](crate::Error::InvocationFailed) if the process fails
    /// - [`Error::VersionNotFound`](crate::Error::VersionNotFound) if the output has no banner
    pub fn fetch(&self) -> Result<Installation> {
        let path = self.discovery.locate()?;
        let output = self.runner.run(&path, &[self.version_flag.as_str()])?;
        let snapshot = parser::parse(&output)?;

        info!(
            path = %path.display(),
            version = %snapshot.version(),
            plugins = snapshot.plugin_count(),
            "read Qt Creator info"
        );

        Ok(Installation::new(path, snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Returns canned output and records how it was called.
    struct FakeRunner {
        output: std::result::Result<String, String>,
        calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    }

    impl FakeRunner {
        fn ok(output: &str) -> Self {
            Self {
                output: Ok(output.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                output: Err(reason.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &Path, args: &[&str]) -> Result<String> {
            self.calls.borrow_mut().push((
                program.to_path_buf(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            self.output.clone().map_err(|reason| Error::InvocationFailed {
                path: program.to_path_buf(),
                reason,
            })
        }
    }

    fn fake_executable() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qtcreator");
        fs::write(&path, "").unwrap();
        (dir, path)
    }

    #[test]
    fn test_fetch() {
        let (_dir, path) = fake_executable();
        let runner = FakeRunner::ok("Qt Creator 13.0.1\nCore 13.0.1 Basic IDE functionality\n");
        let provider = InfoProvider::with_runner(Discovery::explicit(&path), runner);

        let installation = provider.fetch().unwrap();

        assert_eq!(installation.path, path);
        assert_eq!(installation.snapshot.version().version, "13.0.1");
        assert!(installation.snapshot.get_exact("Core").is_some());

        let calls = provider.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, path);
        assert_eq!(calls[0].1, vec!["-version"]);
    }

    #[test]
    fn test_fetch_custom_flag() {
        let (_dir, path) = fake_executable();
        let provider = InfoProvider::with_runner(
            Discovery::explicit(&path),
            FakeRunner::ok("Qt Creator 13.0.1\n"),
        )
        .with_version_flag("--version");

        provider.fetch().unwrap();
        assert_eq!(provider.runner.calls.borrow()[0].1, vec!["--version"]);
    }

    #[test]
    fn test_fetch_not_found_skips_runner() {
        let dir = tempfile::tempdir().unwrap();
        let provider = InfoProvider::with_runner(
            Discovery::explicit(dir.path().join("missing")),
            FakeRunner::ok("Qt Creator 13.0.1\n"),
        );

        assert!(matches!(
            provider.fetch(),
            Err(Error::ExecutableNotFound { .. })
        ));
        assert!(provider.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_fetch_invocation_failed() {
        let (_dir, path) = fake_executable();
        let provider =
            InfoProvider::with_runner(Discovery::explicit(&path), FakeRunner::failing("exit status: 1"));

        match provider.fetch() {
            Err(Error::InvocationFailed { path: failed, reason }) => {
                assert_eq!(failed, path);
                assert_eq!(reason, "exit status: 1");
            }
            other => panic!("expected InvocationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_version_not_found() {
        let (_dir, path) = fake_executable();
        let provider = InfoProvider::with_runner(
            Discovery::explicit(&path),
            FakeRunner::ok("Usage: qtcreator [OPTION]... [FILE]...\n"),
        );

        assert!(matches!(provider.fetch(), Err(Error::VersionNotFound)));
    }

    #[test]
    fn test_fetch_is_not_cached() {
        let (_dir, path) = fake_executable();
        let provider = InfoProvider::with_runner(
            Discovery::explicit(&path),
            FakeRunner::ok("Qt Creator 13.0.1\nCore 13.0.1 Core\n"),
        );

        let first = provider.fetch().unwrap();
        let second = provider.fetch().unwrap();

        assert_eq!(first.snapshot, second.snapshot);
        assert_eq!(provider.runner.calls.borrow().len(), 2);
    }
}
