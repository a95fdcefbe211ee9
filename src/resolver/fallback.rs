//! Last-resort class tables for lookups the configuration misses.

use indexmap::IndexMap;

use crate::style::{ResolutionWarning, DEFAULT_VARIANT};

/// Classes served when a lookup misses the configuration entirely.
///
/// Keys are `component.variant` pairs. There is intentionally no
/// `button.default` entry: a misspelled button variant should come back
/// empty rather than silently styled.
pub const BUILTIN_FALLBACKS: &[(&str, &str)] = &[
    ("button.primary", "bg-blue-600 text-white hover:bg-blue-700"),
    (
        "alert.default",
        "bg-gray-50 border border-gray-200 text-gray-800 rounded-lg p-4",
    ),
    (
        "input.default",
        "border border-gray-300 rounded-lg px-3 py-2 focus:ring-2 focus:ring-blue-500",
    ),
    (
        "badge.default",
        "bg-gray-100 text-gray-800 rounded-full px-2.5 py-0.5 text-xs font-medium",
    ),
];

/// A keyed table of last-resort class strings.
///
/// The resolver consults this table after a configuration miss: first under
/// the exact `component.variant` key, then under `component.default`. Tables
/// start out carrying [`BUILTIN_FALLBACKS`]; entries added later replace
/// earlier ones key by key.
///
/// # Example
///
/// ```
/// use attire::FallbackTable;
///
/// let table = FallbackTable::new().add("toast.default", "rounded-lg shadow-lg p-4");
/// assert!(table.contains("button.primary"));
/// assert!(table.contains("toast.default"));
/// ```
#[derive(Debug, Clone)]
pub struct FallbackTable {
    entries: IndexMap<String, String>,
}

impl FallbackTable {
    /// Creates a table pre-populated with [`BUILTIN_FALLBACKS`].
    pub fn new() -> Self {
        let entries = BUILTIN_FALLBACKS
            .iter()
            .map(|(key, classes)| (key.to_string(), classes.to_string()))
            .collect();
        Self { entries }
    }

    /// Creates a table with no entries, not even the builtins.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds an entry, consuming and returning `self` for chaining.
    pub fn add(mut self, key: impl Into<String>, classes: impl Into<String>) -> Self {
        self.insert(key, classes);
        self
    }

    /// Adds or replaces an entry in place.
    pub fn insert(&mut self, key: impl Into<String>, classes: impl Into<String>) {
        self.entries.insert(key.into(), classes.into());
    }

    /// Looks up an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|classes| classes.as_str())
    }

    /// Returns true if the exact key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over `(key, classes)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, classes)| (key.as_str(), classes.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a missed lookup against the table.
    ///
    /// Tries `component.variant` exactly, then `component.default`.
    pub(crate) fn resolve(
        &self,
        component: &str,
        variant: &str,
    ) -> Result<&str, ResolutionWarning> {
        let exact = format!("{component}.{variant}");
        if let Some(classes) = self.get(&exact) {
            return Ok(classes);
        }
        if variant != DEFAULT_VARIANT {
            let default_key = format!("{component}.{DEFAULT_VARIANT}");
            if let Some(classes) = self.get(&default_key) {
                return Ok(classes);
            }
        }
        Err(ResolutionWarning::FallbackMissing { key: exact })
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_carries_builtins() {
        let table = FallbackTable::new();
        assert_eq!(table.len(), BUILTIN_FALLBACKS.len());
        for (key, classes) in BUILTIN_FALLBACKS {
            assert_eq!(table.get(key), Some(*classes));
        }
        assert!(FallbackTable::empty().is_empty());
    }

    #[test]
    fn test_resolve_exact_key_first() {
        let table = FallbackTable::new();
        let classes = table.resolve("button", "primary").unwrap();
        assert!(classes.contains("bg-blue-600"));
    }

    #[test]
    fn test_resolve_falls_through_to_default() {
        let table = FallbackTable::new();
        let classes = table.resolve("alert", "warning").unwrap();
        assert!(classes.contains("bg-gray-50"));
    }

    #[test]
    fn test_resolve_missing_reports_exact_key() {
        let table = FallbackTable::new();
        // No button.default builtin, so unknown button variants miss.
        assert_eq!(
            table.resolve("button", "tertiary"),
            Err(ResolutionWarning::FallbackMissing {
                key: "button.tertiary".to_string()
            })
        );
    }

    #[test]
    fn test_added_entries_replace_builtins() {
        let table = FallbackTable::new().add("button.primary", "bg-indigo-600");
        assert_eq!(table.resolve("button", "primary").unwrap(), "bg-indigo-600");
        assert_eq!(table.len(), BUILTIN_FALLBACKS.len());
    }

    #[test]
    fn test_custom_component_default_serves_all_variants() {
        let table = FallbackTable::new().add("toast.default", "shadow-lg p-4");
        assert_eq!(table.resolve("toast", "fancy").unwrap(), "shadow-lg p-4");
        assert_eq!(table.resolve("toast", "default").unwrap(), "shadow-lg p-4");
    }
}
