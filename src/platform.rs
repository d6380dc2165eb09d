//! Cross-platform path resolution.
//!
//! This module knows where Qt Creator is usually installed on each
//! platform. None of these functions check that the candidates exist;
//! [`Discovery`](crate::provider::Discovery) does the probing.

use crate::model::Platform;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Name of the Qt Creator executable looked up on `PATH`.
pub const QTCREATOR_BINARY: &str = "qtcreator";

/// Returns the default Qt Creator locations for the current platform.
///
/// Platform-specific locations:
/// - Linux: `qtcreator` on `PATH`, then `~/Qt/Tools/QtCreator/bin/qtcreator`
/// - macOS: `~/Qt/Qt Creator.app/Contents/MacOS/Qt Creator`, then the same
///   bundle under `/Applications`
/// - Windows: `C:\Qt\Tools\QtCreator\bin\qtcreator.exe`, then
///   `C:\Program Files\Qt\Tools\QtCreator\bin\qtcreator.exe`
pub fn qtcreator_candidates() -> Vec<PathBuf> {
    let path_var = std::env::var_os("PATH");
    candidates_for(Platform::current(), dirs::home_dir().as_deref(), path_var.as_deref())
}

/// Builds the candidate list for `platform` from explicit inputs.
pub fn candidates_for(
    platform: Platform,
    home: Option<&Path>,
    path_var: Option<&OsStr>,
) -> Vec<PathBuf> {
    match platform {
        Platform::Linux => {
            let mut candidates = Vec::new();
            if let Some(path_var) = path_var {
                candidates.extend(search_path(QTCREATOR_BINARY, path_var));
            }
            if let Some(home) = home {
                candidates.push(
                    home.join("Qt")
                        .join("Tools")
                        .join("QtCreator")
                        .join("bin")
                        .join(QTCREATOR_BINARY),
                );
            }
            candidates
        }
        Platform::MacOS => {
            let bundle = Path::new("Qt Creator.app")
                .join("Contents")
                .join("MacOS")
                .join("Qt Creator");
            let mut candidates = Vec::new();
            if let Some(home) = home {
                candidates.push(home.join("Qt").join(&bundle));
            }
            candidates.push(Path::new("/Applications").join(&bundle));
            candidates
        }
        Platform::Windows => vec![
            PathBuf::from(r"C:\Qt\Tools\QtCreator\bin\qtcreator.exe"),
            PathBuf::from(r"C:\Program Files\Qt\Tools\QtCreator\bin\qtcreator.exe"),
        ],
    }
}

/// Returns every file named `binary` found in the directories of a
/// `PATH`-style variable, in search order.
pub fn search_path(binary: &str, path_var: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(binary))
        .filter(|path| path.is_file())
        .collect()
}

/// Returns the configuration directory for qtctoys.
///
/// Platform-specific locations:
/// - Linux: `~/.config/qtctoys/`
/// - macOS: `~/Library/Application Support/qtctoys/`
/// - Windows: `%APPDATA%\qtctoys\`
///
/// Falls back to `./qtctoys/` if no config directory can be determined.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("qtctoys")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;

    #[test]
    fn test_windows_candidates() {
        let candidates = candidates_for(Platform::Windows, None, None);
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].to_string_lossy().starts_with(r"C:\Qt"));
        assert!(candidates[1].to_string_lossy().contains("Program Files"));
    }

    #[test]
    fn test_macos_candidates() {
        let home = Path::new("/Users/dev");
        let candidates = candidates_for(Platform::MacOS, Some(home), None);

        assert_eq!(
            candidates[0],
            PathBuf::from("/Users/dev/Qt/Qt Creator.app/Contents/MacOS/Qt Creator")
        );
        assert_eq!(
            candidates[1],
            PathBuf::from("/Applications/Qt Creator.app/Contents/MacOS/Qt Creator")
        );
    }

    #[test]
    fn test_linux_candidates_prefer_path() {
        let bin_dir = tempfile::tempdir().unwrap();
        let binary = bin_dir.path().join(QTCREATOR_BINARY);
        fs::write(&binary, "").unwrap();

        let path_var = std::env::join_paths([bin_dir.path()]).unwrap();
        let home = Path::new("/home/dev");
        let candidates = candidates_for(Platform::Linux, Some(home), Some(path_var.as_os_str()));

        assert_eq!(candidates[0], binary);
        assert_eq!(
            candidates[1],
            PathBuf::from("/home/dev/Qt/Tools/QtCreator/bin/qtcreator")
        );
    }

    #[test]
    fn test_search_path_skips_missing() {
        let empty = tempfile::tempdir().unwrap();
        let with_binary = tempfile::tempdir().unwrap();
        fs::write(with_binary.path().join(QTCREATOR_BINARY), "").unwrap();

        let path_var: OsString =
            std::env::join_paths([empty.path(), with_binary.path()]).unwrap();
        let found = search_path(QTCREATOR_BINARY, &path_var);

        assert_eq!(found, vec![with_binary.path().join(QTCREATOR_BINARY)]);
    }

    #[test]
    fn test_config_dir_name() {
        assert!(config_dir().ends_with("qtctoys"));
    }
}
