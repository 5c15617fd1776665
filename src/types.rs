use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::casing::capitalize_first;
use crate::strategy::NamingStrategy;

/// Strategy handle held by collections and the registry.
pub type SharedNamingStrategy = Arc<dyn NamingStrategy>;

/// How a first-difference collection glues two partial names together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concatenation {
    /// `left_right`
    #[default]
    Underscore,
    /// `leftright`
    #[serde(rename = "none")]
    Plain,
    /// `leftRight`
    CapitalizeFirst,
}

impl Concatenation {
    pub fn join(&self, left: &str, right: &str) -> String {
        match self {
            Concatenation::Underscore => format!("{left}_{right}"),
            Concatenation::Plain => format!("{left}{right}"),
            Concatenation::CapitalizeFirst => format!("{left}{}", capitalize_first(right)),
        }
    }
}

/// How a namer collection picks among its strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// One winning strategy per class handles every name for that class.
    #[default]
    Precedence,
    /// Each operation takes the first proposal differing from the default.
    FirstDifference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenation_modes() {
        assert_eq!(Concatenation::Underscore.join("user", "group"), "user_group");
        assert_eq!(Concatenation::Plain.join("user", "group"), "usergroup");
        assert_eq!(Concatenation::CapitalizeFirst.join("user", "group"), "userGroup");
    }

    #[test]
    fn concatenation_serde_names() {
        let mode: Concatenation = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(mode, Concatenation::Plain);
        let mode: Concatenation = serde_json::from_str("\"capitalize_first\"").unwrap();
        assert_eq!(mode, Concatenation::CapitalizeFirst);
    }
}
