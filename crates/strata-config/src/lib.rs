//! Layered configuration resolution with key aliasing.
//!
//! `strata-config` resolves string-keyed, hierarchical settings from an
//! ordered chain of sources and lets application code consume them under
//! canonical key names even when a backing store exposes legacy ones. The
//! key-swap decorator wraps every provider registered inside an
//! [`add_key_swapped`](KeySwapExt::add_key_swapped) scope, rewriting lookups,
//! writes, and child-key enumeration through a caller-supplied alias table:
//!
//! ```
//! use strata_config::{AliasMap, ConfigBuilder, EnvSource, KeySwapExt, LayeredConfigBuilder};
//!
//! let mut aliases = AliasMap::new();
//! aliases.insert(
//!     "connectionStrings:MyDb".to_string(),
//!     "MyCompany_Foo_Bar".to_string(),
//! );
//!
//! let mut builder = LayeredConfigBuilder::new();
//! builder
//!     .add_in_memory([("app:name", "demo")])
//!     .add_key_swapped(
//!         |swapped| {
//!             swapped.add_env(EnvSource::with_vars([(
//!                 "MyCompany_Foo_Bar",
//!                 "server=localhost;database=mydb",
//!             )]));
//!         },
//!         aliases,
//!     );
//!
//! let config = builder.build().unwrap();
//! assert_eq!(
//!     config.get("connectionStrings:MyDb").as_deref(),
//!     Some("server=localhost;database=mydb"),
//! );
//! ```

mod builder;
mod data;
mod env;
mod error;
mod memory;
mod path;
mod provider;
mod root;
mod source;
mod swap;

/// Builder contract and the default layered builder.
pub use builder::{ConfigBuilder, LayeredConfigBuilder, Properties};
/// Environment snapshot source.
pub use env::{EnvProvider, EnvSource};
/// Public error type for building and resolution.
pub use error::ConfigError;
/// In-memory source.
pub use memory::{MemoryProvider, MemorySource};
/// Key-path helpers.
pub use path::{KEY_DELIMITER, combine, compare_keys, parent_path, section_key};
/// Provider contract.
pub use provider::{ConfigProvider, ReloadToken};
/// Resolved configuration chain.
pub use root::{ConfigRoot, ConfigSection};
/// Source contract.
pub use source::{BuildContext, ConfigSource};
/// Key-swapping decorator.
pub use swap::{AliasMap, KeySwapBuilder, KeySwapExt, KeySwapProvider, KeySwapSource};
