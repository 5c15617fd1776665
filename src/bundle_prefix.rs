use indexmap::IndexMap;

use crate::casing::Casing;
use crate::config::PrefixStrategyConfig;
use crate::error::Result;
use crate::filters::ListFilter;
use crate::meta::ClassNames;
use crate::modules::ModuleEnumerator;
use crate::strategy::{NamingStrategy, PrefixedNamer};

/// Prefixes table names with the name of the module (bundle) owning the class.
///
/// The prefix map is derived once from the host's module list: each module
/// contributes its (possibly remapped) name as prefix for every class under its
/// namespace root. `FooBundle` rooted at `Acme\Foo` turns
/// `Acme\Foo\Entity\SomeEntity` into `foo_some_entity`.
#[derive(Clone, Debug)]
pub struct BundlePrefix {
    namer: PrefixedNamer,
    /// cased table prefix -> module namespace root
    map: IndexMap<String, String>,
}

impl BundlePrefix {
    pub fn new(modules: &dyn ModuleEnumerator, config: PrefixStrategyConfig) -> Result<Self> {
        let filter = ListFilter::from_lists(config.allowlist, config.denylist)?;
        let namer = PrefixedNamer {
            casing: config.case,
            join_table_field_suffix: config.join_table_field_suffix,
        };

        let mut map = IndexMap::new();
        for module in modules.modules() {
            if !filter.permits(|name| name == module.name) {
                continue;
            }

            let namespace = ClassNames::trim(&module.namespace);
            if namespace.is_empty() {
                tracing::warn!(module = %module.name, "module has no namespace root, skipping");
                continue;
            }

            let short_name = ClassNames::strip_module_suffix(&module.name);
            let prefix = config
                .map
                .get(&module.name)
                .or_else(|| config.map.get(short_name))
                .map(String::as_str)
                .unwrap_or(short_name);

            map.insert(namer.underscore(prefix), namespace.to_string());
        }

        tracing::debug!(
            modules = map.len(),
            filter = filter.as_str(),
            case = config.case.as_str(),
            "built bundle prefix naming strategy"
        );

        Ok(Self { namer, map })
    }

    pub fn casing(&self) -> Casing {
        self.namer.casing
    }

    /// Derived map of table prefix to namespace root, in module order.
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Table prefix for a class, if its namespace belongs to a known module.
    pub fn resolve_prefix(&self, class_name: &str) -> Option<&str> {
        self.map
            .iter()
            .find(|(_, namespace)| ClassNames::has_prefix(class_name, namespace))
            .map(|(prefix, _)| prefix.as_str())
            .filter(|prefix| !prefix.is_empty())
    }
}

impl NamingStrategy for BundlePrefix {
    fn class_to_table_name(&self, class_name: &str) -> String {
        self.namer
            .table_name(self.resolve_prefix(class_name), class_name)
    }

    fn property_to_column_name(&self, property_name: &str, _class_name: Option<&str>) -> String {
        self.namer.underscore(property_name)
    }

    fn embedded_field_to_column_name(
        &self,
        property_name: &str,
        embedded_column_name: &str,
        _class_name: Option<&str>,
        _embedded_class_name: Option<&str>,
    ) -> String {
        self.namer
            .embedded_column(property_name, embedded_column_name)
    }

    fn reference_column_name(&self) -> String {
        self.namer.reference_column()
    }

    fn join_column_name(&self, property_name: &str) -> String {
        self.namer.join_column(property_name)
    }

    fn join_table_name(
        &self,
        source_class_name: &str,
        target_class_name: &str,
        property_name: Option<&str>,
    ) -> String {
        self.namer.join_table(
            &self.class_to_table_name(source_class_name),
            &self.class_to_table_name(target_class_name),
            property_name,
        )
    }

    fn join_key_column_name(
        &self,
        entity_class_name: &str,
        referenced_column_name: Option<&str>,
    ) -> String {
        self.namer.join_key(
            &self.class_to_table_name(entity_class_name),
            referenced_column_name,
        )
    }
}
