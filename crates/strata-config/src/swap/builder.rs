//! Builder decoration that makes every registered source alias-aware.

use super::{AliasMap, KeySwapSource};
use crate::builder::{ConfigBuilder, Properties};
use crate::error::ConfigError;
use crate::root::ConfigRoot;
use crate::source::ConfigSource;
use log::debug;
use std::sync::Arc;

/// Builder decorator that wraps every added source in a [`KeySwapSource`].
///
/// Everything except [`add`](ConfigBuilder::add) is passthrough to the outer
/// builder: the property bag, the registered source list, and the final
/// build step are the outer builder's own.
pub struct KeySwapBuilder<'a> {
    inner: &'a mut dyn ConfigBuilder,
    aliases: Arc<AliasMap>,
}

impl<'a> KeySwapBuilder<'a> {
    /// Decorate `inner`; sources added here swap keys through `aliases`.
    pub fn new(inner: &'a mut dyn ConfigBuilder, aliases: Arc<AliasMap>) -> Self {
        Self { inner, aliases }
    }
}

impl ConfigBuilder for KeySwapBuilder<'_> {
    fn properties(&self) -> &Properties {
        self.inner.properties()
    }

    fn properties_mut(&mut self) -> &mut Properties {
        self.inner.properties_mut()
    }

    fn sources(&self) -> &[Box<dyn ConfigSource>] {
        self.inner.sources()
    }

    fn add(&mut self, source: Box<dyn ConfigSource>) {
        debug!(
            "wrapping source registration with key swapping (aliases={})",
            self.aliases.len()
        );
        self.inner
            .add(Box::new(KeySwapSource::new(source, Arc::clone(&self.aliases))));
    }

    fn build(&self) -> Result<ConfigRoot, ConfigError> {
        self.inner.build()
    }
}

/// Entry point for composing key-swapped sources into a builder.
pub trait KeySwapExt: ConfigBuilder {
    /// Run `configure` against a key-swapping view of this builder.
    ///
    /// Every source added inside the callback is wrapped with `aliases`;
    /// sources added outside it are untouched. Returns the builder itself
    /// for chaining.
    fn add_key_swapped<F>(&mut self, configure: F, aliases: AliasMap) -> &mut Self
    where
        Self: Sized,
        F: FnOnce(&mut KeySwapBuilder<'_>),
    {
        debug!("entering key-swapped configuration scope (aliases={})", aliases.len());
        let mut swapped = KeySwapBuilder::new(self, Arc::new(aliases));
        configure(&mut swapped);
        self
    }
}

impl<B: ConfigBuilder> KeySwapExt for B {}
