use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qt Creator's own version, as printed in its `-version` banner.
///
/// Free-form: no semantic-version parsing is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub name: String,
    pub version: String,
    /// Free text following the version token; empty when absent.
    pub description: String,
}

impl PluginRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
        }
    }
}

/// The parsed result of one `-version` invocation.
///
/// A snapshot is built once and never mutated afterwards. Plugins are keyed
/// by name; use the query methods for lookups and sorted listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    version: VersionInfo,
    plugins: BTreeMap<String, PluginRecord>,
}

impl Snapshot {
    /// Builds a snapshot from a version and a set of plugin records.
    ///
    /// Records are keyed by their name; a later record replaces an earlier
    /// one with the same name.
    pub fn new(version: VersionInfo, plugins: impl IntoIterator<Item = PluginRecord>) -> Self {
        let plugins = plugins
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();

        Self { version, plugins }
    }

    pub fn version(&self) -> &VersionInfo {
        &self.version
    }

    pub fn plugins(&self) -> &BTreeMap<String, PluginRecord> {
        &self.plugins
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }
}
