use std::sync::Arc;

use crate::error::{NamingError, Result};
use crate::strategy::NamingStrategy;
use crate::types::SharedNamingStrategy;

/// Collection where every class belongs to exactly one strategy.
///
/// A class belongs to the first concurrent strategy whose table name for it
/// differs (ignoring case) from the default strategy's; otherwise to the
/// default. All names concerning that class are then produced by its owner.
#[derive(Clone)]
pub struct PrecedenceCollection {
    default: SharedNamingStrategy,
    concurrent: Vec<SharedNamingStrategy>,
    join_table_field_suffix: bool,
}

impl PrecedenceCollection {
    pub fn new(
        default: SharedNamingStrategy,
        concurrent: Vec<SharedNamingStrategy>,
        join_table_field_suffix: bool,
    ) -> Result<Self> {
        let mut collection = Self {
            default,
            concurrent: Vec::with_capacity(concurrent.len()),
            join_table_field_suffix,
        };
        for strategy in concurrent {
            collection.register_strategy(strategy)?;
        }
        Ok(collection)
    }

    /// Append a concurrent strategy with the lowest precedence so far.
    ///
    /// The default strategy instance itself can not be registered; another
    /// instance of the same type with the same settings can.
    pub fn register_strategy(&mut self, strategy: SharedNamingStrategy) -> Result<&mut Self> {
        if Arc::ptr_eq(&strategy, &self.default) {
            return Err(NamingError::InvalidArgument(
                "concurrent naming strategy can not be the default naming strategy".into(),
            ));
        }
        self.concurrent.push(strategy);
        tracing::debug!(
            concurrent = self.concurrent.len(),
            "registered precedence naming strategy"
        );
        Ok(self)
    }

    /// Strategy owning `class_name`; the default when no class is given.
    pub fn find_applicable_strategy(&self, class_name: Option<&str>) -> &SharedNamingStrategy {
        self.find_concurrent(class_name).unwrap_or(&self.default)
    }

    /// Concurrent strategy claiming the class, if any.
    fn find_concurrent(&self, class_name: Option<&str>) -> Option<&SharedNamingStrategy> {
        let class_name = class_name?;
        let default_name = self.default.class_to_table_name(class_name).to_lowercase();

        let found = self.concurrent.iter().position(|strategy| {
            strategy.class_to_table_name(class_name).to_lowercase() != default_name
        });
        tracing::trace!(class = class_name, strategy = ?found, "resolved naming strategy");

        found.map(|index| &self.concurrent[index])
    }
}

impl NamingStrategy for PrecedenceCollection {
    fn class_to_table_name(&self, class_name: &str) -> String {
        self.find_applicable_strategy(Some(class_name))
            .class_to_table_name(class_name)
    }

    fn property_to_column_name(&self, property_name: &str, class_name: Option<&str>) -> String {
        self.find_applicable_strategy(class_name)
            .property_to_column_name(property_name, class_name)
    }

    fn embedded_field_to_column_name(
        &self,
        property_name: &str,
        embedded_column_name: &str,
        class_name: Option<&str>,
        embedded_class_name: Option<&str>,
    ) -> String {
        // The embeddable's owner takes precedence over the embedding class's.
        let strategy = self
            .find_concurrent(embedded_class_name)
            .or_else(|| self.find_concurrent(class_name))
            .unwrap_or(&self.default);

        strategy.embedded_field_to_column_name(
            property_name,
            embedded_column_name,
            class_name,
            embedded_class_name,
        )
    }

    fn reference_column_name(&self) -> String {
        self.default.reference_column_name()
    }

    fn join_column_name(&self, property_name: &str) -> String {
        self.default.join_column_name(property_name)
    }

    fn join_table_name(
        &self,
        source_class_name: &str,
        target_class_name: &str,
        property_name: Option<&str>,
    ) -> String {
        let table_name = format!(
            "{}_{}",
            self.class_to_table_name(source_class_name),
            self.class_to_table_name(target_class_name)
        );

        match property_name {
            Some(property) if self.join_table_field_suffix && !property.is_empty() => format!(
                "{table_name}_{}",
                self.property_to_column_name(property, Some(source_class_name))
            ),
            _ => table_name,
        }
    }

    fn join_key_column_name(
        &self,
        entity_class_name: &str,
        referenced_column_name: Option<&str>,
    ) -> String {
        let strategy = self.find_applicable_strategy(Some(entity_class_name));
        let table_name = strategy.class_to_table_name(entity_class_name);

        let column = referenced_column_name
            .map(|column| strategy.property_to_column_name(column, None))
            .filter(|column| !column.is_empty())
            .unwrap_or_else(|| strategy.reference_column_name());

        format!("{table_name}_{column}")
    }
}
