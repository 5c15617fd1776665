use crate::error::{NamingError, Result};

/// Restricts which identifiers a prefix map applies to.
///
/// An allow-list and a deny-list are mutually exclusive; with neither
/// configured the map applies to everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Allow(Vec<String>),
    Deny(Vec<String>),
}

impl ListFilter {
    /// Build a filter from the two configured lists.
    ///
    /// Fails when both lists carry entries, whatever those entries are.
    pub fn from_lists(allowlist: Vec<String>, denylist: Vec<String>) -> Result<Self> {
        match (allowlist.is_empty(), denylist.is_empty()) {
            (true, true) => Ok(ListFilter::All),
            (false, true) => Ok(ListFilter::Allow(allowlist)),
            (true, false) => Ok(ListFilter::Deny(denylist)),
            (false, false) => Err(NamingError::Config(
                "use either an allow-list or a deny-list (or neither), not both".into(),
            )),
        }
    }

    /// Whether an identifier passes the filter, given how a single list entry matches it.
    pub fn permits<F>(&self, mut matches: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        match self {
            ListFilter::All => true,
            ListFilter::Allow(entries) => entries.iter().any(|e| matches(e.as_str())),
            ListFilter::Deny(entries) => !entries.iter().any(|e| matches(e.as_str())),
        }
    }

    pub fn is_denied<F>(&self, mut matches: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        match self {
            ListFilter::Deny(entries) => entries.iter().any(|e| matches(e.as_str())),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListFilter::All => "all",
            ListFilter::Allow(_) => "allow",
            ListFilter::Deny(_) => "deny",
        }
    }
}
