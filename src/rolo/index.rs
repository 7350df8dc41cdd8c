//! Display indexing for the session.
//!
//! The list shows 1-based indexes over the *currently visible* subset, and
//! item commands (`show`, `edit`, `delete`) address contacts through those
//! indexes or by name. Indexes are ephemeral: they are reassigned every time
//! the visible set changes, which is why resolution always happens against a
//! freshly computed view.

use crate::error::{Result, RoloError};
use crate::model::Contact;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DisplayContact {
    pub contact: Contact,
    pub index: usize,
}

/// Assigns 1-based display indexes in list order.
pub fn index_contacts(contacts: Vec<Contact>) -> Vec<DisplayContact> {
    contacts
        .into_iter()
        .enumerate()
        .map(|(i, contact)| DisplayContact {
            contact,
            index: i + 1,
        })
        .collect()
}

/// A user input selecting one contact: a display index, or a name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSelector {
    Index(usize),
    Name(String),
}

impl std::str::FromStr for ContactSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(ContactSelector::Index(n));
        }
        Ok(ContactSelector::Name(s.to_string()))
    }
}

impl std::fmt::Display for ContactSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactSelector::Index(n) => write!(f, "{}", n),
            ContactSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// Resolves a selector against the visible subset. Name matching prefers a
/// case-insensitive exact match, then falls back to substring; ambiguity is
/// settled by list order.
pub fn resolve(visible: &[DisplayContact], selector: &ContactSelector) -> Result<Uuid> {
    match selector {
        ContactSelector::Index(n) => visible
            .iter()
            .find(|dc| dc.index == *n)
            .map(|dc| dc.contact.id),
        ContactSelector::Name(name) => {
            let needle = name.to_lowercase();
            visible
                .iter()
                .find(|dc| dc.contact.name.to_lowercase() == needle)
                .or_else(|| {
                    visible
                        .iter()
                        .find(|dc| dc.contact.name.to_lowercase().contains(&needle))
                })
                .map(|dc| dc.contact.id)
        }
    }
    .ok_or_else(|| RoloError::Selector(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn visible(names: &[&str]) -> Vec<DisplayContact> {
        let contacts = names
            .iter()
            .map(|n| {
                Contact::new(
                    n.to_string(),
                    "".into(),
                    "".into(),
                    "".into(),
                    "friend".into(),
                    None,
                )
            })
            .collect();
        index_contacts(contacts)
    }

    #[test]
    fn parses_index_and_name() {
        assert_eq!(
            ContactSelector::from_str("3"),
            Ok(ContactSelector::Index(3))
        );
        assert_eq!(
            ContactSelector::from_str("Ada"),
            Ok(ContactSelector::Name("Ada".to_string()))
        );
        assert!(ContactSelector::from_str("").is_err());
        assert!(ContactSelector::from_str("0").is_err());
    }

    #[test]
    fn resolves_by_index() {
        let view = visible(&["Ada", "Grace"]);
        let id = resolve(&view, &ContactSelector::Index(2)).unwrap();
        assert_eq!(id, view[1].contact.id);
        assert!(resolve(&view, &ContactSelector::Index(3)).is_err());
    }

    #[test]
    fn exact_name_match_wins_over_substring() {
        let view = visible(&["Ada Lovelace", "Ada"]);
        let id = resolve(&view, &ContactSelector::Name("ada".to_string())).unwrap();
        assert_eq!(id, view[1].contact.id);

        let id = resolve(&view, &ContactSelector::Name("Lovelace".to_string())).unwrap();
        assert_eq!(id, view[0].contact.id);
    }

    #[test]
    fn unmatched_name_is_an_error() {
        let view = visible(&["Ada"]);
        assert!(resolve(&view, &ContactSelector::Name("Grace".to_string())).is_err());
    }
}
