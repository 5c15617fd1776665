use indexmap::IndexMap;

use crate::casing::Casing;
use crate::config::PrefixStrategyConfig;
use crate::error::Result;
use crate::filters::ListFilter;
use crate::meta::ClassNames;
use crate::strategy::{NamingStrategy, PrefixedNamer};

/// Prefixes table names according to the namespace a class lives in.
///
/// With `App\Billing => bill`, the class `App\Billing\Entity\Invoice` maps to
/// table `bill_invoice`. The first configured namespace that is a literal
/// prefix of the class name wins.
#[derive(Clone, Debug)]
pub struct ClassNamespacePrefix {
    namer: PrefixedNamer,
    /// namespace prefix -> cased table prefix
    map: IndexMap<String, String>,
    filter: ListFilter,
}

impl ClassNamespacePrefix {
    pub fn new(config: PrefixStrategyConfig) -> Result<Self> {
        let trim_all = |entries: Vec<String>| -> Vec<String> {
            entries
                .iter()
                .map(|e| ClassNames::trim(e).to_string())
                .collect()
        };
        let filter = ListFilter::from_lists(trim_all(config.allowlist), trim_all(config.denylist))?;

        let namer = PrefixedNamer {
            casing: config.case,
            join_table_field_suffix: config.join_table_field_suffix,
        };
        let map: IndexMap<String, String> = config
            .map
            .iter()
            .map(|(namespace, prefix)| {
                (
                    ClassNames::trim(namespace).to_string(),
                    namer.underscore(prefix),
                )
            })
            .collect();

        tracing::debug!(
            namespaces = map.len(),
            filter = filter.as_str(),
            case = config.case.as_str(),
            "built class namespace prefix naming strategy"
        );

        Ok(Self { namer, map, filter })
    }

    pub fn casing(&self) -> Casing {
        self.namer.casing
    }

    /// Table prefix for a class, if one applies.
    pub fn resolve_prefix(&self, class_name: &str) -> Option<&str> {
        let class_name = ClassNames::trim(class_name);

        if self
            .filter
            .is_denied(|namespace| ClassNames::has_prefix(class_name, namespace))
        {
            return None;
        }

        let (_, prefix) = self
            .map
            .iter()
            .find(|(namespace, _)| ClassNames::has_prefix(class_name, namespace))?;

        if prefix.is_empty() {
            return None;
        }

        self.filter
            .permits(|namespace| ClassNames::has_prefix(class_name, namespace))
            .then_some(prefix.as_str())
    }
}

impl NamingStrategy for ClassNamespacePrefix {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NamingError;

    fn billing(case: Casing) -> ClassNamespacePrefix {
        ClassNamespacePrefix::new(
            PrefixStrategyConfig::new()
                .with_case(case)
                .map_entry("App\\Billing", "bill"),
        )
        .unwrap()
    }

    #[test]
    fn prefixes_matching_namespace() {
        let lower = billing(Casing::Lowercase);
        assert_eq!(lower.class_to_table_name("App\\Billing\\Entity\\Invoice"), "bill_invoice");
        let upper = billing(Casing::Uppercase);
        assert_eq!(upper.class_to_table_name("App\\Billing\\Entity\\Invoice"), "BILL_INVOICE");
    }

    #[test]
    fn leading_delimiter_does_not_matter() {
        let strategy = billing(Casing::Lowercase);
        assert_eq!(strategy.class_to_table_name("\\App\\Billing\\Invoice"), "bill_invoice");
    }

    #[test]
    fn malformed_identifiers_get_no_prefix() {
        let strategy = billing(Casing::Lowercase);
        assert_eq!(strategy.class_to_table_name(""), "");
        assert_eq!(strategy.class_to_table_name("InvoiceLine"), "invoice_line");
        assert_eq!(strategy.resolve_prefix("Invoice"), None);
    }

    #[test]
    fn table_prefix_is_cased() {
        let strategy = ClassNamespacePrefix::new(
            PrefixStrategyConfig::new()
                .with_case(Casing::Uppercase)
                .map_entry("App\\Shop", "shopFront"),
        )
        .unwrap();
        assert_eq!(strategy.resolve_prefix("App\\Shop\\Order"), Some("SHOP_FRONT"));
    }

    #[test]
    fn first_configured_namespace_wins() {
        let strategy = ClassNamespacePrefix::new(
            PrefixStrategyConfig::new()
                .map_entry("App", "app")
                .map_entry("App\\Billing", "bill"),
        )
        .unwrap();
        assert_eq!(strategy.class_to_table_name("App\\Billing\\Invoice"), "app_invoice");
    }

    #[test]
    fn allow_and_deny_are_exclusive() {
        let err = ClassNamespacePrefix::new(
            PrefixStrategyConfig::new()
                .with_allowlist(["App"])
                .with_denylist(["App"]),
        )
        .unwrap_err();
        assert!(matches!(err, NamingError::Config(_)));
    }
}
