//! Source descriptors and the context builders hand them while building.

use crate::builder::Properties;
use crate::error::ConfigError;
use crate::provider::ConfigProvider;

/// Context a builder passes to each source during [`build`](ConfigSource::build).
pub struct BuildContext<'a> {
    properties: &'a Properties,
}

impl<'a> BuildContext<'a> {
    /// Wrap the builder's shared property bag.
    pub fn new(properties: &'a Properties) -> Self {
        Self { properties }
    }

    /// The builder's shared property bag.
    pub fn properties(&self) -> &Properties {
        self.properties
    }
}

/// Descriptor capable of producing a provider when the builder builds.
pub trait ConfigSource {
    /// Build the provider this source describes.
    fn build(&self, ctx: &BuildContext<'_>) -> Result<Box<dyn ConfigProvider>, ConfigError>;
}
