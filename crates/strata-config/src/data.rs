//! Case-insensitive key/value data shared by the concrete providers.

use crate::path;

/// Backing data for providers that materialize key/value pairs.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProviderData {
    entries: Vec<(String, String)>,
}

impl ProviderData {
    /// Collect pairs into backing data; later duplicates overwrite earlier
    /// ones.
    pub(crate) fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = Self::default();
        for (key, value) in pairs {
            data.set(&key.into(), &value.into());
        }
        data
    }

    /// Look up a value, matching the key case-insensitively.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Insert or replace a value; the caller's key casing is kept.
    pub(crate) fn set(&mut self, key: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
        {
            Some(entry) => *entry = (key.to_string(), value.to_string()),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Distinct immediate child names under `parent`.
    pub(crate) fn child_names(&self, parent: Option<&str>) -> Vec<String> {
        let mut names = Vec::new();
        for (key, _) in &self.entries {
            if let Some(segment) = path::child_segment(key, parent) {
                names.push(segment.to_string());
            }
        }
        path::dedup_keys(names)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Merge a provider's own child names with the keys earlier providers in the
/// chain already reported, sorted by the configuration key ordering.
pub(crate) fn merge_child_keys(own: Vec<String>, earlier_keys: &[String]) -> Vec<String> {
    let mut keys = own;
    keys.extend(earlier_keys.iter().cloned());
    keys.sort_by(|a, b| path::compare_keys(a, b));
    keys
}
