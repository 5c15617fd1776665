use crate::casing::{underscore, Casing};
use crate::meta::ClassNames;

/// Naming strategy abstraction consumed by a persistence mapper.
///
/// Every concrete strategy and every collection implements these seven
/// operations. Implementations are immutable once built, so they can be shared
/// behind an `Arc` and called from any thread.
pub trait NamingStrategy: Send + Sync {
    /// Table name for a fully-qualified class name.
    fn class_to_table_name(&self, class_name: &str) -> String;

    /// Column name for a property, optionally knowing its owning class.
    fn property_to_column_name(&self, property_name: &str, class_name: Option<&str>) -> String;

    /// Column name for a field of an embedded object.
    fn embedded_field_to_column_name(
        &self,
        property_name: &str,
        embedded_column_name: &str,
        class_name: Option<&str>,
        embedded_class_name: Option<&str>,
    ) -> String;

    /// Name of the referenced (primary key) column.
    fn reference_column_name(&self) -> String;

    /// Foreign key column name for an association property.
    fn join_column_name(&self, property_name: &str) -> String;

    /// Name of the table joining two entities.
    fn join_table_name(
        &self,
        source_class_name: &str,
        target_class_name: &str,
        property_name: Option<&str>,
    ) -> String;

    /// Name of a join table's key column pointing at an entity.
    fn join_key_column_name(
        &self,
        entity_class_name: &str,
        referenced_column_name: Option<&str>,
    ) -> String;
}

/// Plain underscore naming with no table prefixes, matching the host mapper's
/// stock strategy. Usually the default member of a collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnderscoreNaming {
    casing: Casing,
}

impl UnderscoreNaming {
    pub fn new(casing: Casing) -> Self {
        Self { casing }
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    fn underscore(&self, literal: &str) -> String {
        underscore(literal, self.casing)
    }
}

impl NamingStrategy for UnderscoreNaming {
    fn class_to_table_name(&self, class_name: &str) -> String {
        self.underscore(ClassNames::short_name(class_name))
    }

    fn property_to_column_name(&self, property_name: &str, _class_name: Option<&str>) -> String {
        self.underscore(property_name)
    }

    fn embedded_field_to_column_name(
        &self,
        property_name: &str,
        embedded_column_name: &str,
        _class_name: Option<&str>,
        _embedded_class_name: Option<&str>,
    ) -> String {
        // The embedded column was already named by the embeddable's own mapping.
        format!("{}_{}", self.underscore(property_name), embedded_column_name)
    }

    fn reference_column_name(&self) -> String {
        self.casing.reference_column().to_string()
    }

    fn join_column_name(&self, property_name: &str) -> String {
        format!(
            "{}_{}",
            self.underscore(property_name),
            self.reference_column_name()
        )
    }

    fn join_table_name(
        &self,
        source_class_name: &str,
        target_class_name: &str,
        _property_name: Option<&str>,
    ) -> String {
        format!(
            "{}_{}",
            self.class_to_table_name(source_class_name),
            self.class_to_table_name(target_class_name)
        )
    }

    fn join_key_column_name(
        &self,
        entity_class_name: &str,
        referenced_column_name: Option<&str>,
    ) -> String {
        let column = match referenced_column_name {
            Some(column) if !column.is_empty() => column.to_string(),
            _ => self.reference_column_name(),
        };
        format!("{}_{}", self.class_to_table_name(entity_class_name), column)
    }
}

/// Shared column/join rules of the prefixing strategies.
///
/// The strategies differ only in how a class resolves to a table prefix; once
/// the prefix is known, every name is built the same way.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrefixedNamer {
    pub(crate) casing: Casing,
    pub(crate) join_table_field_suffix: bool,
}

impl PrefixedNamer {
    pub(crate) fn underscore(&self, literal: &str) -> String {
        underscore(literal, self.casing)
    }

    pub(crate) fn table_name(&self, prefix: Option<&str>, class_name: &str) -> String {
        let short = self.underscore(ClassNames::short_name(ClassNames::trim(class_name)));
        match prefix {
            Some(prefix) => format!("{prefix}_{short}"),
            None => short,
        }
    }

    pub(crate) fn embedded_column(&self, property_name: &str, embedded_column_name: &str) -> String {
        format!(
            "{}_{}",
            self.underscore(property_name),
            self.underscore(embedded_column_name)
        )
    }

    pub(crate) fn reference_column(&self) -> String {
        self.casing.reference_column().to_string()
    }

    pub(crate) fn join_column(&self, property_name: &str) -> String {
        format!("{}_{}", self.underscore(property_name), self.reference_column())
    }

    pub(crate) fn join_table(
        &self,
        source_table: &str,
        target_table: &str,
        property_name: Option<&str>,
    ) -> String {
        match property_name {
            Some(property) if self.join_table_field_suffix => format!(
                "{source_table}_{target_table}_{}",
                self.underscore(property)
            ),
            _ => format!("{source_table}_{target_table}"),
        }
    }

    pub(crate) fn join_key(&self, entity_table: &str, referenced_column_name: Option<&str>) -> String {
        let column = match referenced_column_name {
            Some(column) if !column.is_empty() => self.underscore(column),
            _ => self.reference_column(),
        };
        format!("{entity_table}_{column}")
    }
}
