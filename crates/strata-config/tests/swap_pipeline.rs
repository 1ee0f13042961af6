//! End-to-end tests for key-swapped configuration pipelines.

use pretty_assertions::assert_eq;
use strata_config::{
    AliasMap, ConfigBuilder, ConfigError, EnvSource, KeySwapExt, LayeredConfigBuilder,
};

fn connection_aliases() -> AliasMap {
    let mut aliases = AliasMap::new();
    aliases.insert(
        "connectionStrings:MyDb".to_string(),
        "MyCompany_Foo_Bar".to_string(),
    );
    aliases
}

#[test]
fn swapped_env_source_resolves_canonical_names() {
    let mut builder = LayeredConfigBuilder::new();
    builder
        .add_in_memory([("app:name", "sample")])
        .add_key_swapped(
            |swapped| {
                swapped.add_env(EnvSource::with_vars([(
                    "MyCompany_Foo_Bar",
                    "server=localhost;database=mydb;integrated security=true",
                )]));
            },
            connection_aliases(),
        );

    let config = builder.build().expect("build");
    assert_eq!(
        config.get("connectionStrings:MyDb").as_deref(),
        Some("server=localhost;database=mydb;integrated security=true")
    );
    assert_eq!(config.get("app:name").as_deref(), Some("sample"));

    let section = config.section("connectionStrings");
    let children: Vec<String> = section
        .children()
        .iter()
        .map(|child| child.key().to_string())
        .collect();
    assert_eq!(children, vec!["MyDb".to_string()]);
    assert_eq!(
        section.get("MyDb").as_deref(),
        Some("server=localhost;database=mydb;integrated security=true")
    );
}

#[test]
fn sources_outside_the_swap_scope_keep_their_keys() {
    let mut builder = LayeredConfigBuilder::new();
    builder.add_in_memory([("plain", "1")]).add_key_swapped(
        |swapped| {
            swapped.add_env(EnvSource::with_vars([("ignored", "x")]));
        },
        {
            let mut aliases = AliasMap::new();
            aliases.insert("alias:plain".to_string(), "plain".to_string());
            aliases
        },
    );

    let config = builder.build().expect("build");
    assert_eq!(config.get("plain").as_deref(), Some("1"));
    // The alias only applies to sources added inside the scope, and the env
    // source there has no such variable.
    assert_eq!(config.get("alias:plain"), None);
}

#[test]
fn writes_through_a_read_only_swapped_source_propagate_the_error() {
    let mut builder = LayeredConfigBuilder::new();
    builder
        .add_in_memory([("connectionStrings:MyDb", "placeholder")])
        .add_key_swapped(
            |swapped| {
                swapped.add_env(EnvSource::with_vars([("MyCompany_Foo_Bar", "real")]));
            },
            connection_aliases(),
        );

    let mut config = builder.build().expect("build");
    assert_eq!(config.get("connectionStrings:MyDb").as_deref(), Some("real"));
    let err = config
        .set("connectionStrings:MyDb", "updated")
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ReadOnlySource { key } if key == "MyCompany_Foo_Bar"
    ));
}

#[test]
fn writable_swapped_sources_round_trip_through_the_root() {
    let mut builder = LayeredConfigBuilder::new();
    builder.add_key_swapped(
        |swapped| {
            swapped.add_in_memory([("MyCompany_Foo_Bar", "initial")]);
        },
        connection_aliases(),
    );

    let mut config = builder.build().expect("build");
    config
        .set("connectionStrings:MyDb", "updated")
        .expect("set");
    assert_eq!(
        config.get("connectionStrings:MyDb").as_deref(),
        Some("updated")
    );
    assert_eq!(config.get("MyCompany_Foo_Bar").as_deref(), Some("updated"));
}
