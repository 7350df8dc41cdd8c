//! Filtering and category enumeration over a store snapshot.
//!
//! Both operations are pure functions of the snapshot: the visible set is
//! computed in one step and only then handed to the renderer, so no
//! intermediate state is ever observable. The filter list is likewise rebuilt
//! in full on every call rather than diffed; directories are tens of contacts,
//! not thousands.

use crate::model::Contact;
use std::fmt;
use std::str::FromStr;

/// Sentinel filter value that selects the whole directory.
pub const ALL: &str = "all";

/// The active filter: everything, or one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Category value, stored lower-cased. Matching is case-insensitive on
    /// both sides.
    Kind(String),
}

impl Filter {
    pub fn kind(value: &str) -> Self {
        Filter::Kind(value.trim().to_lowercase())
    }

    /// Every string is a valid filter value; the sentinel and the empty
    /// string select everything.
    pub fn parse(s: &str) -> Self {
        let value = s.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Filter::All
        } else {
            Filter::kind(value)
        }
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::parse(s))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "{}", ALL),
            Filter::Kind(k) => write!(f, "{}", k),
        }
    }
}

/// Computes the visible subset for a filter. `All` is the full snapshot in
/// original order; a kind nobody has yields an empty list, not an error.
pub fn apply(snapshot: &[Contact], filter: &Filter) -> Vec<Contact> {
    match filter {
        Filter::All => snapshot.to_vec(),
        Filter::Kind(kind) => snapshot
            .iter()
            .filter(|c| c.kind.to_lowercase() == *kind)
            .cloned()
            .collect(),
    }
}

/// Distinct `kind` values across the snapshot, deduplicated
/// case-insensitively with the first-seen casing kept, in snapshot order.
pub fn kinds(snapshot: &[Contact]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for contact in snapshot {
        if !seen.iter().any(|k| k.eq_ignore_ascii_case(&contact.kind)) {
            seen.push(contact.kind.clone());
        }
    }
    seen
}
