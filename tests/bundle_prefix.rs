//! Behaviour of the bundle-prefix strategy against the fixture module list.

use anyhow::Result;
use naming_strategy::{
    BundlePrefix, Casing, ModuleEnumerator, ModuleInfo, NamingError, NamingStrategy,
    PrefixStrategyConfig,
};

mod common;
use common::{BAR_ENTITY, BUZZ_ENTITY, BUZZ_NESTED_ENTITY, FOO_ENTITY, fixture_modules};

fn prefixed(case: Casing) -> Result<BundlePrefix> {
    Ok(BundlePrefix::new(
        &fixture_modules(),
        PrefixStrategyConfig::new()
            .with_case(case)
            .map_entry("FooBundle", "foo_prefix")
            .map_entry("Bar", "prefix_bar"),
    )?)
}

/// Counts how often the module list is read.
struct CountingModules {
    modules: Vec<ModuleInfo>,
    calls: std::cell::Cell<usize>,
}

impl ModuleEnumerator for CountingModules {
    fn modules(&self) -> Vec<ModuleInfo> {
        self.calls.set(self.calls.get() + 1);
        self.modules.clone()
    }
}

#[test]
fn allow_and_deny_lists_together_are_rejected() {
    let err = BundlePrefix::new(
        &fixture_modules(),
        PrefixStrategyConfig::new()
            .with_allowlist(["FooBundle"])
            .with_denylist(["FooBundle"]),
    )
    .unwrap_err();
    assert!(matches!(err, NamingError::Config(_)));
}

#[test]
fn module_list_is_read_once() -> Result<()> {
    let modules = CountingModules {
        modules: fixture_modules(),
        calls: std::cell::Cell::new(0),
    };
    let strategy = BundlePrefix::new(&modules, PrefixStrategyConfig::new())?;
    strategy.class_to_table_name(FOO_ENTITY);
    strategy.class_to_table_name(BAR_ENTITY);
    assert_eq!(modules.calls.get(), 1);
    Ok(())
}

#[test]
fn class_to_table_name() -> Result<()> {
    let lower = prefixed(Casing::Lowercase)?;
    assert_eq!(lower.class_to_table_name(FOO_ENTITY), "foo_prefix_some_entity");
    assert_eq!(lower.class_to_table_name(BAR_ENTITY), "prefix_bar_other_entity");
    assert_eq!(lower.class_to_table_name(BUZZ_NESTED_ENTITY), "buzz_third_entity");

    let upper = prefixed(Casing::Uppercase)?;
    assert_eq!(upper.class_to_table_name(FOO_ENTITY), "FOO_PREFIX_SOME_ENTITY");
    assert_eq!(upper.class_to_table_name(BAR_ENTITY), "PREFIX_BAR_OTHER_ENTITY");
    assert_eq!(upper.class_to_table_name(BUZZ_NESTED_ENTITY), "BUZZ_THIRD_ENTITY");
    Ok(())
}

#[test]
fn class_outside_every_module_is_unprefixed() -> Result<()> {
    let strategy = prefixed(Casing::Lowercase)?;
    assert_eq!(strategy.class_to_table_name("Vendor\\Entity\\OrderLine"), "order_line");
    assert_eq!(strategy.class_to_table_name(""), "");
    Ok(())
}

#[test]
fn column_names() -> Result<()> {
    let lower = prefixed(Casing::Lowercase)?;
    let upper = prefixed(Casing::Uppercase)?;

    assert_eq!(lower.property_to_column_name("someObjectProperty", None), "some_object_property");
    assert_eq!(upper.property_to_column_name("someObjectProperty", None), "SOME_OBJECT_PROPERTY");
    assert_eq!(
        lower.embedded_field_to_column_name("someObjectProperty", "embeddedColumnName", None, None),
        "some_object_property_embedded_column_name"
    );
    assert_eq!(
        upper.embedded_field_to_column_name("someObjectProperty", "embeddedColumnName", None, None),
        "SOME_OBJECT_PROPERTY_EMBEDDED_COLUMN_NAME"
    );
    assert_eq!(lower.reference_column_name(), "id");
    assert_eq!(upper.reference_column_name(), "ID");
    assert_eq!(lower.join_column_name("aProperty"), "a_property_id");
    assert_eq!(upper.join_column_name("aProperty"), "A_PROPERTY_ID");
    Ok(())
}

#[test]
fn join_table_name() -> Result<()> {
    let lower = prefixed(Casing::Lowercase)?;
    assert_eq!(
        lower.join_table_name(FOO_ENTITY, BAR_ENTITY, None),
        "foo_prefix_some_entity_prefix_bar_other_entity"
    );
    assert_eq!(
        lower.join_table_name(FOO_ENTITY, BAR_ENTITY, Some("aProperty")),
        "foo_prefix_some_entity_prefix_bar_other_entity_a_property"
    );

    let upper = prefixed(Casing::Uppercase)?;
    assert_eq!(
        upper.join_table_name(FOO_ENTITY, BAR_ENTITY, Some("aProperty")),
        "FOO_PREFIX_SOME_ENTITY_PREFIX_BAR_OTHER_ENTITY_A_PROPERTY"
    );

    let no_suffix = BundlePrefix::new(
        &fixture_modules(),
        PrefixStrategyConfig::new()
            .with_join_table_field_suffix(false)
            .map_entry("FooBundle", "foo_prefix")
            .map_entry("Bar", "prefix_bar"),
    )?;
    assert_eq!(
        no_suffix.join_table_name(FOO_ENTITY, BAR_ENTITY, Some("aProperty")),
        "foo_prefix_some_entity_prefix_bar_other_entity"
    );
    Ok(())
}

#[test]
fn join_key_column_name() -> Result<()> {
    let lower = prefixed(Casing::Lowercase)?;
    assert_eq!(lower.join_key_column_name(FOO_ENTITY, None), "foo_prefix_some_entity_id");
    assert_eq!(lower.join_key_column_name(BAR_ENTITY, None), "prefix_bar_other_entity_id");
    assert_eq!(lower.join_key_column_name(BUZZ_ENTITY, Some("fkId")), "buzz_third_entity_fk_id");

    let upper = prefixed(Casing::Uppercase)?;
    assert_eq!(upper.join_key_column_name(FOO_ENTITY, None), "FOO_PREFIX_SOME_ENTITY_ID");
    assert_eq!(upper.join_key_column_name(BUZZ_ENTITY, Some("fkId")), "BUZZ_THIRD_ENTITY_FK_ID");
    Ok(())
}

#[test]
fn deny_listed_module_keeps_plain_names() -> Result<()> {
    let strategy = BundlePrefix::new(
        &fixture_modules(),
        PrefixStrategyConfig::new()
            .map_entry("FooBundle", "foo_prefix")
            .map_entry("Bar", "prefix_bar")
            .with_denylist(["FooBundle"]),
    )?;
    assert_eq!(strategy.class_to_table_name(FOO_ENTITY), "some_entity");
    assert_eq!(strategy.class_to_table_name(BAR_ENTITY), "prefix_bar_other_entity");
    assert_eq!(strategy.class_to_table_name(BUZZ_NESTED_ENTITY), "buzz_third_entity");
    Ok(())
}

#[test]
fn allow_listed_module_is_the_only_one_prefixed() -> Result<()> {
    let strategy = BundlePrefix::new(
        &fixture_modules(),
        PrefixStrategyConfig::new()
            .map_entry("FooBundle", "foo_prefix")
            .map_entry("Bar", "prefix_bar")
            .with_allowlist(["FooBundle"]),
    )?;
    assert_eq!(strategy.class_to_table_name(FOO_ENTITY), "foo_prefix_some_entity");
    assert_eq!(strategy.class_to_table_name(BAR_ENTITY), "other_entity");
    assert_eq!(strategy.class_to_table_name(BUZZ_NESTED_ENTITY), "third_entity");
    Ok(())
}
