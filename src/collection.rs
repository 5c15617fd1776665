use std::sync::Arc;

use crate::error::{NamingError, Result};
use crate::strategy::NamingStrategy;
use crate::types::{Concatenation, SharedNamingStrategy};

/// Collection where, per operation, the first concurrent proposal that differs
/// from the default strategy's proposal wins.
///
/// Join table and join key names are assembled from per-class table names, so
/// the two sides of an association may each come from a different strategy.
/// Proposals are compared case-sensitively.
#[derive(Clone)]
pub struct FirstDifferenceCollection {
    default: SharedNamingStrategy,
    concurrent: Vec<SharedNamingStrategy>,
    concatenation: Concatenation,
    join_table_field_suffix: bool,
}

impl FirstDifferenceCollection {
    pub fn new(
        default: SharedNamingStrategy,
        concurrent: Vec<SharedNamingStrategy>,
        concatenation: Concatenation,
        join_table_field_suffix: bool,
    ) -> Result<Self> {
        let mut collection = Self {
            default,
            concurrent: Vec::with_capacity(concurrent.len()),
            concatenation,
            join_table_field_suffix,
        };
        for strategy in concurrent {
            collection.register_strategy(strategy)?;
        }
        Ok(collection)
    }

    /// Append a concurrent strategy; it is consulted after those already registered.
    pub fn register_strategy(&mut self, strategy: SharedNamingStrategy) -> Result<&mut Self> {
        if Arc::ptr_eq(&strategy, &self.default) {
            return Err(NamingError::InvalidArgument(
                "concurrent naming strategy can not be the default naming strategy".into(),
            ));
        }
        self.concurrent.push(strategy);
        tracing::debug!(
            concurrent = self.concurrent.len(),
            "registered first-difference naming strategy"
        );
        Ok(self)
    }

    pub fn concatenation(&self) -> Concatenation {
        self.concatenation
    }

    fn first_difference<F>(&self, propose: F) -> String
    where
        F: Fn(&dyn NamingStrategy) -> String,
    {
        let default_name = propose(self.default.as_ref());
        self.concurrent
            .iter()
            .map(|strategy| propose(strategy.as_ref()))
            .find(|proposal| *proposal != default_name)
            .unwrap_or(default_name)
    }
}

impl NamingStrategy for FirstDifferenceCollection {
    fn class_to_table_name(&self, class_name: &str) -> String {
        self.first_difference(|s| s.class_to_table_name(class_name))
    }

    fn property_to_column_name(&self, property_name: &str, class_name: Option<&str>) -> String {
        self.first_difference(|s| s.property_to_column_name(property_name, class_name))
    }

    fn embedded_field_to_column_name(
        &self,
        property_name: &str,
        embedded_column_name: &str,
        class_name: Option<&str>,
        embedded_class_name: Option<&str>,
    ) -> String {
        self.first_difference(|s| {
            s.embedded_field_to_column_name(
                property_name,
                embedded_column_name,
                class_name,
                embedded_class_name,
            )
        })
    }

    fn reference_column_name(&self) -> String {
        self.first_difference(|s| s.reference_column_name())
    }

    fn join_column_name(&self, property_name: &str) -> String {
        self.first_difference(|s| s.join_column_name(property_name))
    }

    fn join_table_name(
        &self,
        source_class_name: &str,
        target_class_name: &str,
        property_name: Option<&str>,
    ) -> String {
        let table_name = self.concatenation.join(
            &self.class_to_table_name(source_class_name),
            &self.class_to_table_name(target_class_name),
        );

        match property_name {
            Some(property) if self.join_table_field_suffix => self.concatenation.join(
                &table_name,
                &self.property_to_column_name(property, Some(source_class_name)),
            ),
            _ => table_name,
        }
    }

    fn join_key_column_name(
        &self,
        entity_class_name: &str,
        referenced_column_name: Option<&str>,
    ) -> String {
        let column = match referenced_column_name {
            Some(column) if !column.is_empty() => self.property_to_column_name(column, None),
            _ => self.reference_column_name(),
        };
        self.concatenation
            .join(&self.class_to_table_name(entity_class_name), &column)
    }
}
