//! Parsing of `qtcreator -version` output.
//!
//! The output is loosely formatted: a `Qt Creator <version> ...` banner near
//! the top, a few lines about the Qt build, then one line per plugin of the
//! shape `<Name> <version> <description...>`. There is no delimiter between
//! the sections, so plugin lines are recognised purely by their second
//! token looking like a dotted-numeric version.
//!
//! # Example
//!
//! ```
//! let raw = "Qt Creator 13.0.1\nBased on Qt 6.7.0\nCore 13.0.1 Basic IDE functionality\n";
//! let snapshot = qtctoys::parser::parse(raw).unwrap();
//!
//! assert_eq!(snapshot.version().version, "13.0.1");
//! assert_eq!(snapshot.plugins()["Core"].description, "Basic IDE functionality");
//! ```

use crate::error::{Error, Result};
use crate::model::{PluginRecord, Snapshot, VersionInfo};
use tracing::{debug, trace};

/// Literal prefix of the banner line carrying the application version.
pub const PRODUCT_PREFIX: &str = "Qt Creator";

/// How many leading lines are searched for the banner.
///
/// Plugin descriptions further down may mention the product name, so the
/// search must not run over the whole output.
pub const VERSION_SCAN_LINES: usize = 6;

/// Parses raw `-version` output into a [`Snapshot`].
///
/// Fails with [`Error::VersionNotFound`] when no usable banner is found in
/// the first [`VERSION_SCAN_LINES`] lines. Lines that do not look like
/// plugin entries are dropped without error.
pub fn parse(raw: &str) -> Result<Snapshot> {
    let version = extract_version(raw)?;
    let plugins = extract_plugins(raw);

    debug!(
        version = %version,
        plugins = plugins.len(),
        "parsed Qt Creator version output"
    );

    Ok(Snapshot::new(version, plugins))
}

/// Finds the application version in the head of the output.
pub fn extract_version(raw: &str) -> Result<VersionInfo> {
    let banner = raw
        .lines()
        .take(VERSION_SCAN_LINES)
        .map(|line| line.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .find_map(|line| line.strip_prefix(PRODUCT_PREFIX))
        .ok_or(Error::VersionNotFound)?;

    banner
        .split_whitespace()
        .next()
        .map(VersionInfo::new)
        .ok_or(Error::VersionNotFound)
}

/// Collects every plugin line from the whole output, in input order.
///
/// Duplicates are kept here; [`Snapshot::new`] resolves them last-wins.
pub fn extract_plugins(raw: &str) -> Vec<PluginRecord> {
    raw.lines().filter_map(parse_plugin_line).collect()
}

/// Interprets one line as `<name> <version> [description]`.
///
/// Returns `None` for blank lines, single-token lines and lines whose
/// second token fails [`is_dotted_numeric`].
pub fn parse_plugin_line(line: &str) -> Option<PluginRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, rest) = split_token(line);
    let (version, description) = split_token(rest);

    if version.is_empty() {
        trace!(line, "skipping line without a second token");
        return None;
    }

    if !is_dotted_numeric(version) {
        trace!(line, "skipping line without a numeric version token");
        return None;
    }

    Some(PluginRecord::new(name, version, description.trim()))
}

/// Returns true for tokens such as `13.0.1` or `4.12`.
///
/// At least two `.`-separated segments are required, each non-empty and
/// made only of ASCII digits.
///
/// ```
/// use qtctoys::parser::is_dotted_numeric;
///
/// assert!(is_dotted_numeric("13.0.1"));
/// assert!(!is_dotted_numeric("13"));
/// assert!(!is_dotted_numeric("dev"));
/// assert!(!is_dotted_numeric("13..1"));
/// ```
pub fn is_dotted_numeric(token: &str) -> bool {
    let mut segments = 0;
    for segment in token.split('.') {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

/// Splits off the first whitespace-delimited token.
///
/// The remainder has its leading whitespace removed but is otherwise kept
/// intact, so descriptions retain their inner spacing.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}
