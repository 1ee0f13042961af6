//! In-memory configuration source and its writable provider.

use crate::data::{self, ProviderData};
use crate::error::ConfigError;
use crate::provider::{ConfigProvider, ReloadToken};
use crate::source::{BuildContext, ConfigSource};
use log::debug;

/// Source descriptor for a writable in-memory provider.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    initial: Vec<(String, String)>,
}

impl MemorySource {
    /// An empty source; useful as a writable scratch layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the source with initial key/value pairs.
    pub fn with_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            initial: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MemorySource {
    fn build(&self, _ctx: &BuildContext<'_>) -> Result<Box<dyn ConfigProvider>, ConfigError> {
        debug!("building in-memory provider (pairs={})", self.initial.len());
        Ok(Box::new(MemoryProvider::new(self.initial.iter().cloned())))
    }
}

/// Writable provider holding its data entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    data: ProviderData,
    token: ReloadToken,
}

impl MemoryProvider {
    /// Create a provider seeded with `pairs`.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: ProviderData::from_pairs(pairs),
            token: ReloadToken::new(),
        }
    }
}

impl ConfigProvider for MemoryProvider {
    fn load(&mut self) -> Result<(), ConfigError> {
        // Data lives in memory from construction; nothing to (re)read.
        Ok(())
    }

    fn try_get(&self, key: &str) -> Option<String> {
        self.data.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.data.set(key, value);
        Ok(())
    }

    fn child_keys(&self, earlier_keys: &[String], parent_path: Option<&str>) -> Vec<String> {
        data::merge_child_keys(self.data.child_names(parent_path), earlier_keys)
    }

    fn reload_token(&self) -> ReloadToken {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Properties;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_is_case_insensitive() {
        let provider = MemoryProvider::new([("App:Name", "demo")]);
        assert_eq!(provider.try_get("app:name").as_deref(), Some("demo"));
        assert_eq!(provider.try_get("missing"), None);
    }

    #[test]
    fn set_overwrites_existing_entries() {
        let mut provider = MemoryProvider::new([("app:name", "demo")]);
        provider.set("APP:NAME", "other").expect("set");
        assert_eq!(provider.try_get("app:name").as_deref(), Some("other"));
    }

    #[test]
    fn child_keys_merge_and_sort_with_earlier_keys() {
        let provider = MemoryProvider::new([("servers:10", "a"), ("servers:2", "b")]);
        let earlier = vec!["defaults".to_string()];
        assert_eq!(
            provider.child_keys(&earlier, Some("servers")),
            vec!["2".to_string(), "10".to_string(), "defaults".to_string()]
        );
        assert_eq!(
            provider.child_keys(&[], Some("servers")),
            vec!["2".to_string(), "10".to_string()]
        );
    }

    #[test]
    fn source_builds_a_seeded_provider() {
        let properties = Properties::new();
        let ctx = BuildContext::new(&properties);
        let source = MemorySource::with_pairs([("app:name", "demo")]);
        let provider = source.build(&ctx).expect("build");
        assert_eq!(provider.try_get("app:name").as_deref(), Some("demo"));
    }
}
