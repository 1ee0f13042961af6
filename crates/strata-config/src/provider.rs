//! Provider contract shared by every configuration backend.

use crate::error::ConfigError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Change-notification handle for one provider's backing data.
///
/// Tokens are cheap to clone; every clone observes the same signal. A
/// provider fires a token at most once and hands out a fresh one after the
/// data it guarded has been reloaded.
#[derive(Debug, Clone, Default)]
pub struct ReloadToken {
    changed: Arc<AtomicBool>,
}

impl ReloadToken {
    /// A token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the producer has signaled a change.
    pub fn has_changed(&self) -> bool {
        self.changed.load(Ordering::SeqCst)
    }

    /// Signal observers that backing data may have changed.
    pub fn notify(&self) {
        self.changed.store(true, Ordering::SeqCst);
    }
}

/// A resolved, queryable handle to one configuration source.
///
/// Keys are `:`-delimited hierarchical paths and compare case-insensitively.
pub trait ConfigProvider {
    /// (Re)load the provider's backing data.
    fn load(&mut self) -> Result<(), ConfigError>;

    /// Look up a value; a missing key is `None`, never an error.
    fn try_get(&self, key: &str) -> Option<String>;

    /// Write a value into the backing data.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;

    /// Immediate child names under `parent_path`, merged with the keys
    /// earlier providers in the resolution chain already reported.
    fn child_keys(&self, earlier_keys: &[String], parent_path: Option<&str>) -> Vec<String>;

    /// Token observers can poll for backing-data changes.
    fn reload_token(&self) -> ReloadToken;
}
