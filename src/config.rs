use std::{env, fs};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::casing::Casing;
use crate::error::{NamingError, Result};
use crate::filters::ListFilter;
use crate::registry::StrategyRegistry;
use crate::types::{Concatenation, Resolution};

/// Environment variable naming the JSON configuration file read by [`NamingConfig::from_env`].
pub const CONFIG_ENV: &str = "NAMING_STRATEGY_CONFIG";

/// Configuration shared by the namespace-prefix and bundle-prefix strategies.
///
/// For the namespace strategy `map` goes from namespace prefix to table
/// prefix; for the bundle strategy from module name (with or without its
/// `Bundle` suffix) to table prefix. Map order is significant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixStrategyConfig {
    pub case: Casing,
    pub join_table_field_suffix: bool,
    pub map: IndexMap<String, String>,
    #[serde(alias = "whitelist", deserialize_with = "one_or_many")]
    pub allowlist: Vec<String>,
    #[serde(alias = "blacklist", deserialize_with = "one_or_many")]
    pub denylist: Vec<String>,
}

impl Default for PrefixStrategyConfig {
    fn default() -> Self {
        Self {
            case: Casing::Lowercase,
            join_table_field_suffix: true,
            map: IndexMap::new(),
            allowlist: Vec::new(),
            denylist: Vec::new(),
        }
    }
}

impl PrefixStrategyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case(mut self, case: Casing) -> Self {
        self.case = case;
        self
    }

    pub fn with_join_table_field_suffix(mut self, enabled: bool) -> Self {
        self.join_table_field_suffix = enabled;
        self
    }

    /// Append a map entry; later entries are consulted after earlier ones.
    pub fn map_entry(mut self, key: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.map.insert(key.into(), prefix.into());
        self
    }

    pub fn with_allowlist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowlist = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_denylist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Check the allow/deny exclusivity rule without building a strategy.
    pub fn validate(&self) -> Result<()> {
        ListFilter::from_lists(self.allowlist.clone(), self.denylist.clone()).map(|_| ())
    }
}

/// Configuration of the namer collection wired by the registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamerCollectionConfig {
    /// Service id of the default strategy.
    pub default: String,
    /// Service ids of the concurrent strategies, in precedence order.
    #[serde(deserialize_with = "one_or_many")]
    pub namers: Vec<String>,
    pub join_table_field_suffix: bool,
    /// Only used by [`Resolution::FirstDifference`].
    pub concatenation: Concatenation,
    pub resolution: Resolution,
}

impl Default for NamerCollectionConfig {
    fn default() -> Self {
        Self {
            default: StrategyRegistry::UNDERSCORE.to_string(),
            namers: vec![
                StrategyRegistry::CLASS_NAMESPACE_PREFIX.to_string(),
                StrategyRegistry::BUNDLE_PREFIX.to_string(),
            ],
            join_table_field_suffix: true,
            concatenation: Concatenation::Underscore,
            resolution: Resolution::Precedence,
        }
    }
}

/// Root configuration object; every section falls back to its defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub underscored_bundle_prefix: PrefixStrategyConfig,
    pub underscored_class_namespace_prefix: PrefixStrategyConfig,
    pub underscored_namer_collection: NamerCollectionConfig,
}

impl NamingConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the JSON file named by `NAMING_STRATEGY_CONFIG`.
    pub fn from_env() -> Result<Self> {
        let path = require_env(CONFIG_ENV)?;
        let raw = fs::read_to_string(&path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.underscored_bundle_prefix.validate()?;
        self.underscored_class_namespace_prefix.validate()?;
        if self.underscored_namer_collection.namers.is_empty() {
            return Err(NamingError::Config(
                "namer collection requires at least one concurrent namer".into(),
            ));
        }
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    env::var(key).map_err(|_| NamingError::Config(format!("missing env: {key}")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept either a single string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
