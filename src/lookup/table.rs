use std::collections::BTreeMap;

/// Exact-match map from `"{port},{protocol}"` to tag, all lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: BTreeMap<String, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the tag previously stored under `key`.
    pub fn insert(&mut self, key: String, tag: String) -> Option<String> {
        self.entries.insert(key, tag)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
