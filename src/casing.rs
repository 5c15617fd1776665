use serde::{Deserialize, Serialize};

/// Letter case applied to every token a strategy generates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    #[serde(alias = "lower")]
    Lowercase,
    #[serde(alias = "upper")]
    Uppercase,
}

impl Casing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Casing::Lowercase => "lowercase",
            Casing::Uppercase => "uppercase",
        }
    }

    /// Fold a whole token to this case.
    pub fn apply(&self, literal: &str) -> String {
        match self {
            Casing::Lowercase => literal.to_lowercase(),
            Casing::Uppercase => literal.to_uppercase(),
        }
    }

    /// Reference (primary key) column name for this case.
    pub fn reference_column(&self) -> &'static str {
        match self {
            Casing::Lowercase => "id",
            Casing::Uppercase => "ID",
        }
    }
}

/// Split a camel-cased literal on lower-to-upper transitions and fold it.
///
/// `someFieldName` becomes `some_field_name` (or `SOME_FIELD_NAME`). Existing
/// underscores are kept as they are.
pub fn underscore(literal: &str, casing: Casing) -> String {
    let mut out = String::with_capacity(literal.len() + 4);
    let mut prev: Option<char> = None;
    for c in literal.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('_');
        }
        out.push(c);
        prev = Some(c);
    }
    casing.apply(&out)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(literal: &str) -> String {
    let mut chars = literal.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
