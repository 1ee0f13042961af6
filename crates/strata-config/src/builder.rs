//! Builder contract and the default layered builder.

use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::memory::MemorySource;
use crate::root::ConfigRoot;
use crate::source::{BuildContext, ConfigSource};
use log::debug;
use serde_json::Value;
use std::collections::HashMap;

/// Builder-level property bag shared with sources while building.
pub type Properties = HashMap<String, Value>;

/// An object accumulating configuration sources before producing a resolved
/// root. Decorators implement this over another builder to intercept source
/// registration.
pub trait ConfigBuilder {
    /// Shared property bag.
    fn properties(&self) -> &Properties;

    /// Mutable access to the shared property bag.
    fn properties_mut(&mut self) -> &mut Properties;

    /// Registered sources, in registration order.
    fn sources(&self) -> &[Box<dyn ConfigSource>];

    /// Register a source at the end of the chain.
    fn add(&mut self, source: Box<dyn ConfigSource>);

    /// Build every registered source and assemble the resolution chain.
    fn build(&self) -> Result<ConfigRoot, ConfigError>;

    /// Register a source, chaining.
    fn add_source(&mut self, source: impl ConfigSource + 'static) -> &mut Self
    where
        Self: Sized,
    {
        self.add(Box::new(source));
        self
    }

    /// Register an in-memory source seeded with `pairs`, chaining.
    fn add_in_memory<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.add(Box::new(MemorySource::with_pairs(pairs)));
        self
    }

    /// Register an environment source, chaining.
    fn add_env(&mut self, source: EnvSource) -> &mut Self
    where
        Self: Sized,
    {
        self.add(Box::new(source));
        self
    }
}

/// Default builder accumulating sources into a layered resolution chain.
#[derive(Default)]
pub struct LayeredConfigBuilder {
    properties: Properties,
    sources: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfigBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain a source by value.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.add(Box::new(source));
        self
    }
}

impl ConfigBuilder for LayeredConfigBuilder {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn sources(&self) -> &[Box<dyn ConfigSource>] {
        &self.sources
    }

    fn add(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    fn build(&self) -> Result<ConfigRoot, ConfigError> {
        debug!("building configuration root (sources={})", self.sources.len());
        let ctx = BuildContext::new(&self.properties);
        let mut providers = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            providers.push(source.build(&ctx)?);
        }
        ConfigRoot::new(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryProvider;
    use crate::provider::ConfigProvider;
    use pretty_assertions::assert_eq;

    /// Source that seeds a provider from a builder property.
    struct PropertySeededSource {
        property: String,
    }

    impl ConfigSource for PropertySeededSource {
        fn build(&self, ctx: &BuildContext<'_>) -> Result<Box<dyn ConfigProvider>, ConfigError> {
            let value = ctx
                .properties()
                .get(&self.property)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("missing builder property {}", self.property))
                })?;
            Ok(Box::new(MemoryProvider::new([(
                self.property.as_str(),
                value,
            )])))
        }
    }

    #[test]
    fn later_sources_win_during_resolution() {
        let mut builder = LayeredConfigBuilder::new();
        builder
            .add_in_memory([("app:name", "first")])
            .add_in_memory([("app:name", "second")]);
        let config = builder.build().expect("build");
        assert_eq!(config.get("app:name").as_deref(), Some("second"));
        assert_eq!(builder.sources().len(), 2);
    }

    #[test]
    fn sources_see_builder_properties() {
        let mut builder = LayeredConfigBuilder::new();
        builder
            .properties_mut()
            .insert("seed".to_string(), Value::String("from-bag".to_string()));
        builder.add_source(PropertySeededSource {
            property: "seed".to_string(),
        });
        let config = builder.build().expect("build");
        assert_eq!(config.get("seed").as_deref(), Some("from-bag"));
    }

    #[test]
    fn missing_property_surfaces_a_build_error() {
        let builder = LayeredConfigBuilder::new().with_source(PropertySeededSource {
            property: "seed".to_string(),
        });
        let err = builder.build().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
