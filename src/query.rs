//! Lookups over a parsed [`Snapshot`].
//!
//! All results that reach the user are sorted by plugin name; nothing here
//! depends on map iteration order.

use crate::error::{Error, Result};
use crate::model::{PluginRecord, Snapshot};

impl Snapshot {
    /// Every plugin, sorted by name in byte order.
    pub fn list_all(&self) -> Vec<&PluginRecord> {
        let mut records: Vec<&PluginRecord> = self.plugins().values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    pub fn get_exact(&self, name: &str) -> Option<&PluginRecord> {
        self.plugins().get(name)
    }

    /// Exact lookup, falling back to an ASCII case-insensitive match.
    ///
    /// When several names fold to the same key, the first in sorted order
    /// wins.
    pub fn get_case_insensitive(&self, name: &str) -> Option<&PluginRecord> {
        self.get_exact(name).or_else(|| {
            self.list_all()
                .into_iter()
                .find(|record| record.name.eq_ignore_ascii_case(name))
        })
    }

    /// Names containing `term`, compared in lowercase, sorted ascending.
    pub fn search(&self, term: &str) -> Vec<&str> {
        let term = term.to_lowercase();
        let mut names: Vec<&str> = self
            .plugins()
            .keys()
            .filter(|name| name.to_lowercase().contains(&term))
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// Resolves a user-supplied plugin name.
    ///
    /// Tries an exact match, then a case-insensitive one. On a miss the
    /// error carries the [`search`](Self::search) results as suggestions.
    ///
    /// ```
    /// use qtctoys::{Error, PluginRecord, Snapshot, VersionInfo};
    ///
    /// let snapshot = Snapshot::new(
    ///     VersionInfo::new("13.0.1"),
    ///     vec![
    ///         PluginRecord::new("Core", "13.0.1", ""),
    ///         PluginRecord::new("CorePlugin", "13.0.1", ""),
    ///     ],
    /// );
    ///
    /// assert_eq!(snapshot.resolve("core").unwrap().name, "Core");
    ///
    /// match snapshot.resolve("ore") {
    ///     Err(Error::PluginNotFound { suggestions, .. }) => {
    ///         assert_eq!(suggestions, vec!["Core", "CorePlugin"]);
    ///     }
    ///     other => panic!("unexpected: {:?}", other),
    /// }
    /// ```
    pub fn resolve(&self, name: &str) -> Result<&PluginRecord> {
        self.get_case_insensitive(name)
            .ok_or_else(|| Error::PluginNotFound {
                name: name.to_string(),
                suggestions: self.search(name).into_iter().map(String::from).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::model::{PluginRecord, Snapshot, VersionInfo};

    fn snapshot(names: &[&str]) -> Snapshot {
        Snapshot::new(
            VersionInfo::new("13.0.1"),
            names
                .iter()
                .map(|name| PluginRecord::new(*name, "13.0.1", format!("{} plugin", name))),
        )
    }

    #[test]
    fn test_list_all_sorted() {
        let snapshot = snapshot(&["Zeta", "Alpha"]);
        let names: Vec<&str> = snapshot.list_all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_list_all_byte_order() {
        let snapshot = snapshot(&["beta", "Beta", "Alpha"]);
        let names: Vec<&str> = snapshot.list_all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "beta"]);
    }

    #[test]
    fn test_get_exact() {
        let snapshot = snapshot(&["Core"]);
        assert_eq!(snapshot.get_exact("Core").unwrap().description, "Core plugin");
        assert!(snapshot.get_exact("core").is_none());
    }

    #[test]
    fn test_get_case_insensitive() {
        let snapshot = snapshot(&["Core", "Docker"]);
        assert_eq!(snapshot.get_case_insensitive("core").unwrap().name, "Core");
        assert_eq!(snapshot.get_case_insensitive("DOCKER").unwrap().name, "Docker");
        assert!(snapshot.get_case_insensitive("cor").is_none());
    }

    #[test]
    fn test_case_insensitive_prefers_exact_then_sorted() {
        let snapshot = snapshot(&["core", "CORE", "Core"]);
        assert_eq!(snapshot.get_case_insensitive("core").unwrap().name, "core");
        // "CORE" < "Core" < "core" in byte order.
        assert_eq!(snapshot.get_case_insensitive("cOrE").unwrap().name, "CORE");
    }

    #[test]
    fn test_search() {
        let snapshot = snapshot(&["Docker", "CorePlugin", "Core"]);
        assert_eq!(snapshot.search("cor"), vec!["Core", "CorePlugin"]);
        assert_eq!(snapshot.search("KER"), vec!["Docker"]);
        assert!(snapshot.search("python").is_empty());
        assert_eq!(snapshot.search("").len(), 3);
    }

    #[test]
    fn test_resolve_not_found_with_suggestions() {
        let snapshot = snapshot(&["Core", "CorePlugin", "Docker"]);

        match snapshot.resolve("cor") {
            Err(Error::PluginNotFound { name, suggestions }) => {
                assert_eq!(name, "cor");
                assert_eq!(suggestions, vec!["Core", "CorePlugin"]);
            }
            other => panic!("expected PluginNotFound, got {:?}", other),
        }

        match snapshot.resolve("python") {
            Err(Error::PluginNotFound { suggestions, .. }) => assert!(suggestions.is_empty()),
            other => panic!("expected PluginNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_found() {
        let snapshot = snapshot(&["Core"]);
        assert_eq!(snapshot.resolve("Core").unwrap().name, "Core");
        assert_eq!(snapshot.resolve("CORE").unwrap().name, "Core");
    }
}
