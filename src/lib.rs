//! Composable table and column naming strategies for persistence mappers.
//!
//! Strategies turn class names (`App\Billing\Entity\Invoice`) and property
//! names (`someFieldName`) into physical names (`bill_invoice`,
//! `some_field_name`). Collections combine several strategies, letting
//! different parts of an application follow different naming rules.

pub mod bundle_prefix;
pub mod casing;
pub mod collection;
pub mod config;
pub mod error;
pub mod filters;
pub mod meta;
pub mod modules;
pub mod namespace_prefix;
pub mod precedence;
pub mod registry;
pub mod strategy;
pub mod types;

pub use crate::bundle_prefix::BundlePrefix;
pub use crate::casing::Casing;
pub use crate::collection::FirstDifferenceCollection;
pub use crate::config::{NamerCollectionConfig, NamingConfig, PrefixStrategyConfig};
pub use crate::error::{NamingError, Result};
pub use crate::filters::ListFilter;
pub use crate::meta::ClassNames;
pub use crate::modules::{ModuleEnumerator, ModuleInfo};
pub use crate::namespace_prefix::ClassNamespacePrefix;
pub use crate::precedence::PrecedenceCollection;
pub use crate::registry::StrategyRegistry;
pub use crate::strategy::{NamingStrategy, UnderscoreNaming};
pub use crate::types::{Concatenation, Resolution, SharedNamingStrategy};
