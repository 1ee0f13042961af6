//! Key-remapping decorator over configuration providers.
//!
//! Lets application code consume configuration under canonical key names
//! while a backing store exposes the same values under different (often
//! legacy or externally mandated) names. The decorator wraps any
//! [`ConfigProvider`], rewriting keys on read and write and merging
//! enumerated child keys from both the canonical and legacy namespaces.

mod builder;


pub use builder::{KeySwapBuilder, KeySwapExt};

use crate::error::ConfigError;
use crate::path;
use crate::provider::{ConfigProvider, ReloadToken};
use crate::source::{BuildContext, ConfigSource};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Caller-supplied alias table mapping canonical keys to source keys.
///
/// Iteration order is insertion order, which fixes the grouping order of the
/// derived reverse index.
pub type AliasMap = IndexMap<String, String>;

/// Group canonical aliases by the source key they target.
///
/// Source keys match case-insensitively; each entry keeps the canonical keys
/// in alias-table order. Multiple canonical keys targeting one source key are
/// all kept.
fn index_by_source(aliases: &AliasMap) -> HashMap<String, Vec<String>> {
    let mut index: HashMap<String, Vec<String>> = HashMap::new();
    for (canonical, source) in aliases {
        index
            .entry(source.to_ascii_lowercase())
            .or_default()
            .push(canonical.clone());
    }
    index
}

/// Decorator that rewrites keys between the canonical and source namespaces.
///
/// Translation applies to lookups and writes; loading and reload tokens are
/// pure delegation. The alias table is captured at construction and never
/// mutated.
pub struct KeySwapProvider {
    inner: Box<dyn ConfigProvider>,
    aliases: Arc<AliasMap>,
    by_source: HashMap<String, Vec<String>>,
}

impl KeySwapProvider {
    /// Wrap `inner`, translating keys through `aliases`.
    pub fn new(inner: Box<dyn ConfigProvider>, aliases: Arc<AliasMap>) -> Self {
        let by_source = index_by_source(&aliases);
        debug!("wrapping provider with key swapping (aliases={})", aliases.len());
        Self {
            inner,
            aliases,
            by_source,
        }
    }

    /// Map a canonical key to its source key; unaliased keys pass through.
    fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(canonical, _)| canonical.eq_ignore_ascii_case(key))
            .map(|(_, source)| source.as_str())
            .unwrap_or(key)
    }

    /// Whether the wrapped store holds anything at `source`: a leaf value or
    /// a subtree with children.
    fn source_resolves(&self, source: &str) -> bool {
        self.inner.try_get(source).is_some()
            || !self.inner.child_keys(&[], Some(source)).is_empty()
    }

    /// Read access to the wrapped provider.
    pub fn inner(&self) -> &dyn ConfigProvider {
        self.inner.as_ref()
    }
}

impl ConfigProvider for KeySwapProvider {
    fn load(&mut self) -> Result<(), ConfigError> {
        self.inner.load()
    }

    fn try_get(&self, key: &str) -> Option<String> {
        self.inner.try_get(self.translate(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let target = self.translate(key).to_string();
        self.inner.set(&target, value)
    }

    fn child_keys(&self, earlier_keys: &[String], parent_path: Option<&str>) -> Vec<String> {
        let children = self.inner.child_keys(earlier_keys, parent_path);
        let mut merged = children.clone();

        // A child name that is itself a source key pulls in every canonical
        // name aliasing it, projected to its segment under the parent.
        for name in &children {
            if let Some(canonicals) = self.by_source.get(&name.to_ascii_lowercase()) {
                for canonical in canonicals {
                    let alias_child =
                        path::child_segment(canonical, parent_path).unwrap_or(canonical);
                    merged.push(alias_child.to_string());
                }
            }
        }

        // Aliases nested under the requested parent are reachable children
        // whenever their source key resolves in the wrapped store, even when
        // that source key lives outside the parent's subtree.
        for (canonical, source) in self.aliases.iter() {
            if let Some(segment) = path::child_segment(canonical, parent_path) {
                if self.source_resolves(source) {
                    merged.push(segment.to_string());
                }
            }
        }

        path::dedup_keys(merged)
    }

    fn reload_token(&self) -> ReloadToken {
        self.inner.reload_token()
    }
}

/// Source descriptor that builds a key-swapped provider around an inner
/// source.
pub struct KeySwapSource {
    inner: Box<dyn ConfigSource>,
    aliases: Arc<AliasMap>,
}

impl KeySwapSource {
    /// Wrap `inner` so the provider it builds swaps keys through `aliases`.
    pub fn new(inner: Box<dyn ConfigSource>, aliases: Arc<AliasMap>) -> Self {
        Self { inner, aliases }
    }
}

impl ConfigSource for KeySwapSource {
    fn build(&self, ctx: &BuildContext<'_>) -> Result<Box<dyn ConfigProvider>, ConfigError> {
        let provider = self.inner.build(ctx)?;
        Ok(Box::new(KeySwapProvider::new(
            provider,
            Arc::clone(&self.aliases),
        )))
    }
}
