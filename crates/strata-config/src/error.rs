//! Error types for configuration building and resolution.

use thiserror::Error;

/// Errors returned while building sources or writing through providers.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A write hit a provider whose backing store cannot be modified.
    #[error("configuration source is read-only (key={key})")]
    ReadOnlySource { key: String },
    /// A source or builder was used in an unsupported way.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
