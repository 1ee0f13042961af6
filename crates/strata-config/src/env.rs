//! Environment-variable configuration source.
//!
//! The provider is a read-only snapshot: variables are captured either from
//! an explicit list supplied by the caller or from the process environment at
//! load time, never queried ambiently afterwards. Double underscores in
//! variable names normalize to the `:` key delimiter so flat environments can
//! express hierarchical keys.

use crate::data::{self, ProviderData};
use crate::error::ConfigError;
use crate::path::KEY_DELIMITER;
use crate::provider::{ConfigProvider, ReloadToken};
use crate::source::{BuildContext, ConfigSource};
use log::debug;

/// Source descriptor for a read-only environment snapshot provider.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: Option<String>,
    vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
    /// Capture the process environment when the provider loads.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Use an explicit variable snapshot instead of ambient process state.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: None,
            vars: Some(
                vars.into_iter()
                    .map(|(name, value)| (name.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Keep only variables bearing `prefix`, stripped from the exposed keys.
    pub fn prefixed(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl ConfigSource for EnvSource {
    fn build(&self, _ctx: &BuildContext<'_>) -> Result<Box<dyn ConfigProvider>, ConfigError> {
        debug!(
            "building environment provider (prefix={:?}, explicit={})",
            self.prefix,
            self.vars.is_some()
        );
        Ok(Box::new(EnvProvider::new(self.clone())))
    }
}

/// Read-only provider over an environment snapshot.
#[derive(Debug, Default)]
pub struct EnvProvider {
    source: EnvSource,
    data: ProviderData,
    token: ReloadToken,
    loaded: bool,
}

impl EnvProvider {
    /// Create a provider for `source`; data materializes on [`load`](ConfigProvider::load).
    pub fn new(source: EnvSource) -> Self {
        Self {
            source,
            data: ProviderData::default(),
            token: ReloadToken::new(),
            loaded: false,
        }
    }
}

impl ConfigProvider for EnvProvider {
    fn load(&mut self) -> Result<(), ConfigError> {
        let vars: Vec<(String, String)> = match &self.source.vars {
            Some(vars) => vars.clone(),
            None => std::env::vars().collect(),
        };
        self.data = snapshot(&vars, self.source.prefix.as_deref());
        debug!("environment snapshot loaded (keys={})", self.data.len());
        if self.loaded {
            let previous = std::mem::replace(&mut self.token, ReloadToken::new());
            previous.notify();
        }
        self.loaded = true;
        Ok(())
    }

    fn try_get(&self, key: &str) -> Option<String> {
        self.data.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(ConfigError::ReadOnlySource {
            key: key.to_string(),
        })
    }

    fn child_keys(&self, earlier_keys: &[String], parent_path: Option<&str>) -> Vec<String> {
        data::merge_child_keys(self.data.child_names(parent_path), earlier_keys)
    }

    fn reload_token(&self) -> ReloadToken {
        self.token.clone()
    }
}

/// Filter by prefix and normalize variable names into configuration keys.
fn snapshot(vars: &[(String, String)], prefix: Option<&str>) -> ProviderData {
    let mut data = ProviderData::default();
    for (name, value) in vars {
        let name = match prefix {
            Some(prefix) => match name.get(..prefix.len()) {
                Some(head) if head.eq_ignore_ascii_case(prefix) => &name[prefix.len()..],
                _ => continue,
            },
            None => name.as_str(),
        };
        data.set(&name.replace("__", KEY_DELIMITER), value);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loaded(source: EnvSource) -> EnvProvider {
        let mut provider = EnvProvider::new(source);
        provider.load().expect("load");
        provider
    }

    #[test]
    fn explicit_snapshot_resolves_case_insensitively() {
        let provider = loaded(EnvSource::with_vars([("MyCompany_Foo_Bar", "value")]));
        assert_eq!(provider.try_get("mycompany_foo_bar").as_deref(), Some("value"));
    }

    #[test]
    fn prefix_filters_and_strips() {
        let provider = loaded(
            EnvSource::with_vars([("MYAPP_Server", "s"), ("OTHER", "o")]).prefixed("MYAPP_"),
        );
        assert_eq!(provider.try_get("Server").as_deref(), Some("s"));
        assert_eq!(provider.try_get("OTHER"), None);
    }

    #[test]
    fn double_underscores_become_delimiters() {
        let provider = loaded(EnvSource::with_vars([(
            "connectionStrings__MyDb",
            "server=localhost",
        )]));
        assert_eq!(
            provider.try_get("connectionStrings:MyDb").as_deref(),
            Some("server=localhost")
        );
        assert_eq!(
            provider.child_keys(&[], Some("connectionStrings")),
            vec!["MyDb".to_string()]
        );
    }

    #[test]
    fn writes_are_rejected() {
        let mut provider = loaded(EnvSource::with_vars([("A", "1")]));
        let err = provider.set("A", "2").unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnlySource { key } if key == "A"));
    }

    #[test]
    fn reload_fires_the_previous_token() {
        let mut provider = loaded(EnvSource::with_vars([("A", "1")]));
        let token = provider.reload_token();
        assert!(!token.has_changed());
        provider.load().expect("reload");
        assert!(token.has_changed());
        assert!(!provider.reload_token().has_changed());
    }

    #[test]
    fn process_capture_sees_the_ambient_environment() {
        // SAFETY: test-only mutation of a uniquely named variable.
        unsafe { std::env::set_var("STRATA_CONFIG_TEST_CAPTURE", "yes") };
        let provider = loaded(EnvSource::from_env().prefixed("STRATA_CONFIG_TEST_"));
        assert_eq!(provider.try_get("CAPTURE").as_deref(), Some("yes"));
    }
}
