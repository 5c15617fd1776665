#![allow(dead_code)]

use std::sync::Arc;

use naming_strategy::{
    BundlePrefix, Casing, ClassNamespacePrefix, ModuleInfo, PrefixStrategyConfig,
    SharedNamingStrategy, UnderscoreNaming,
};

/// Namespace root shared by the fixture modules.
pub const FIXTURES: &str = "Acme\\Tests\\Fixtures\\Bundles";

pub const FOO_ENTITY: &str = "Acme\\Tests\\Fixtures\\Bundles\\Foo\\Entity\\SomeEntity";
pub const BAR_ENTITY: &str = "Acme\\Tests\\Fixtures\\Bundles\\Bar\\Entity\\OtherEntity";
pub const BUZZ_ENTITY: &str = "Acme\\Tests\\Fixtures\\Bundles\\Buzz\\Entity\\ThirdEntity";
pub const BUZZ_NESTED_ENTITY: &str =
    "Acme\\Tests\\Fixtures\\Bundles\\Buzz\\Entity\\Subfolder\\ThirdEntity";

pub const APP_ENTITY: &str = "Acme\\App\\TestNamespace\\Entity";
pub const APP_OTHER: &str = "Acme\\App\\TestNamespace\\Other";
pub const UNREGISTERED: &str = "Some\\Unregistered\\Name";

/// Module list as a host application would report it: Foo, Bar and Buzz bundles.
pub fn fixture_modules() -> Vec<ModuleInfo> {
    ["Foo", "Bar", "Buzz"]
        .iter()
        .map(|name| ModuleInfo::new(format!("{name}Bundle"), format!("{FIXTURES}\\{name}")))
        .collect()
}

pub fn class_in(namespace: &str, short_name: &str) -> String {
    format!("{namespace}\\{short_name}")
}

pub fn underscore_default() -> SharedNamingStrategy {
    Arc::new(UnderscoreNaming::default())
}

pub fn bundle_strategy(config: PrefixStrategyConfig) -> SharedNamingStrategy {
    Arc::new(BundlePrefix::new(&fixture_modules(), config).expect("bundle strategy"))
}

pub fn namespace_strategy(config: PrefixStrategyConfig) -> SharedNamingStrategy {
    Arc::new(ClassNamespacePrefix::new(config).expect("namespace strategy"))
}

/// Bundle prefixes for Foo (`foo_bundle_prefix`) and Bar (`bar_bundle_prefix`).
pub fn bundle_prefix_config(case: Casing) -> PrefixStrategyConfig {
    PrefixStrategyConfig::new()
        .with_case(case)
        .map_entry("FooBundle", "foo_bundle_prefix")
        .map_entry("Bar", "bar_bundle_prefix")
}
