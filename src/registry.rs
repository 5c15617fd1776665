use std::sync::Arc;

use indexmap::IndexMap;

use crate::bundle_prefix::BundlePrefix;
use crate::collection::FirstDifferenceCollection;
use crate::config::{NamerCollectionConfig, NamingConfig};
use crate::error::{NamingError, Result};
use crate::modules::ModuleEnumerator;
use crate::namespace_prefix::ClassNamespacePrefix;
use crate::precedence::PrecedenceCollection;
use crate::strategy::UnderscoreNaming;
use crate::types::{Resolution, SharedNamingStrategy};

/// Named strategy instances, wired from configuration.
///
/// Collections reference their members by id, so a configuration can point
/// the namer collection at any registered strategy, including custom ones
/// registered before [`StrategyRegistry::wire_collection`] runs.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    services: IndexMap<String, SharedNamingStrategy>,
}

impl StrategyRegistry {
    pub const UNDERSCORE: &'static str = "underscore";
    pub const CLASS_NAMESPACE_PREFIX: &'static str = "underscored_class_namespace_prefix";
    pub const BUNDLE_PREFIX: &'static str = "underscored_bundle_prefix";
    pub const NAMER_COLLECTION: &'static str = "underscored_namer_collection";

    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stock strategies and the namer collection from `config`.
    pub fn from_config(config: &NamingConfig, modules: &dyn ModuleEnumerator) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::new();
        registry
            .register(Self::UNDERSCORE, Arc::new(UnderscoreNaming::default()))
            .register(
                Self::CLASS_NAMESPACE_PREFIX,
                Arc::new(ClassNamespacePrefix::new(
                    config.underscored_class_namespace_prefix.clone(),
                )?),
            )
            .register(
                Self::BUNDLE_PREFIX,
                Arc::new(BundlePrefix::new(
                    modules,
                    config.underscored_bundle_prefix.clone(),
                )?),
            );
        registry.wire_collection(&config.underscored_namer_collection)?;
        Ok(registry)
    }

    /// Register (or replace) a strategy under `id`.
    pub fn register(&mut self, id: impl Into<String>, strategy: SharedNamingStrategy) -> &mut Self {
        let id = id.into();
        tracing::debug!(id = %id, "registered naming strategy");
        self.services.insert(id, strategy);
        self
    }

    pub fn get(&self, id: &str) -> Option<SharedNamingStrategy> {
        self.services.get(id).cloned()
    }

    pub fn require(&self, id: &str) -> Result<SharedNamingStrategy> {
        self.get(id)
            .ok_or_else(|| NamingError::Config(format!("unknown naming strategy: {id}")))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// The wired namer collection, once [`StrategyRegistry::wire_collection`] has run.
    pub fn collection(&self) -> Option<SharedNamingStrategy> {
        self.get(Self::NAMER_COLLECTION)
    }

    /// Build the namer collection from ids of already registered strategies and
    /// register it under [`StrategyRegistry::NAMER_COLLECTION`].
    pub fn wire_collection(&mut self, config: &NamerCollectionConfig) -> Result<SharedNamingStrategy> {
        let default = self.require(&config.default)?;
        let namers = config
            .namers
            .iter()
            .map(|id| self.require(id))
            .collect::<Result<Vec<_>>>()?;

        let collection: SharedNamingStrategy = match config.resolution {
            Resolution::Precedence => Arc::new(PrecedenceCollection::new(
                default,
                namers,
                config.join_table_field_suffix,
            )?),
            Resolution::FirstDifference => Arc::new(FirstDifferenceCollection::new(
                default,
                namers,
                config.concatenation,
                config.join_table_field_suffix,
            )?),
        };

        tracing::debug!(
            default = %config.default,
            namers = ?config.namers,
            resolution = ?config.resolution,
            "wired namer collection"
        );

        self.register(Self::NAMER_COLLECTION, collection.clone());
        Ok(collection)
    }
}
