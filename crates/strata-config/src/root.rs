//! Resolved configuration chain and hierarchical section views.

use crate::error::ConfigError;
use crate::path;
use crate::provider::ConfigProvider;
use log::info;

/// The resolved, layered configuration: an ordered provider chain where
/// later providers take precedence over earlier ones.
pub struct ConfigRoot {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigRoot {
    /// Load each provider in registration order and assemble the chain.
    pub(crate) fn new(mut providers: Vec<Box<dyn ConfigProvider>>) -> Result<Self, ConfigError> {
        for provider in &mut providers {
            provider.load()?;
        }
        info!("configuration root loaded (providers={})", providers.len());
        Ok(Self { providers })
    }

    /// Resolve a key; the last provider holding it wins.
    pub fn get(&self, key: &str) -> Option<String> {
        self.providers
            .iter()
            .rev()
            .find_map(|provider| provider.try_get(key))
    }

    /// Write a value through every provider in the chain.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        for provider in &mut self.providers {
            provider.set(key, value)?;
        }
        Ok(())
    }

    /// Distinct child names under `parent_path`, aggregated across the chain
    /// by threading each provider's output into the next.
    pub fn child_keys(&self, parent_path: Option<&str>) -> Vec<String> {
        let mut keys = Vec::new();
        for provider in &self.providers {
            keys = provider.child_keys(&keys, parent_path);
        }
        path::dedup_keys(keys)
    }

    /// Hierarchical view rooted at `path`.
    pub fn section(&self, path: &str) -> ConfigSection<'_> {
        ConfigSection {
            root: self,
            path: path.to_string(),
        }
    }

    /// Reload every provider in registration order.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        info!("reloading configuration root (providers={})", self.providers.len());
        for provider in &mut self.providers {
            provider.load()?;
        }
        Ok(())
    }

    /// The provider chain, for inspection.
    pub fn providers(&self) -> &[Box<dyn ConfigProvider>] {
        &self.providers
    }
}

/// A view over one subtree of the resolved configuration.
pub struct ConfigSection<'a> {
    root: &'a ConfigRoot,
    path: String,
}

impl<'a> ConfigSection<'a> {
    /// Last segment of the section path.
    pub fn key(&self) -> &str {
        path::section_key(&self.path)
    }

    /// Full path from the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Value stored directly at the section path, if any.
    pub fn value(&self) -> Option<String> {
        self.root.get(&self.path)
    }

    /// Resolve `key` relative to this section.
    pub fn get(&self, key: &str) -> Option<String> {
        self.root.get(&path::combine(&self.path, key))
    }

    /// Child sections, in enumeration order.
    pub fn children(&self) -> Vec<ConfigSection<'a>> {
        self.root
            .child_keys(Some(&self.path))
            .into_iter()
            .map(|name| ConfigSection {
                root: self.root,
                path: path::combine(&self.path, &name),
            })
            .collect()
    }
}
