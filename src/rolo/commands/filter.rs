use crate::commands::CmdResult;
use crate::directory::{self, Filter};
use crate::error::Result;
use crate::store::ContactStore;

use super::helpers::visible;

/// Computes the visible subset for a filter, plus the available filter
/// values. Total: any filter value produces a defined listing, an unknown
/// kind simply lists nothing.
pub fn run<S: ContactStore>(store: &S, filter: &Filter) -> Result<CmdResult> {
    let listed = visible(store, filter)?;
    let kinds = directory::kinds(&store.snapshot()?);
    Ok(CmdResult::default()
        .with_listed(listed)
        .with_kinds(kinds)
        .with_filter(filter.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_contact("A", "family")
            .with_contact("B", "friend")
            .with_contact("C", "Family")
            .store
    }

    #[test]
    fn lists_exactly_the_matching_kind() {
        let store = store();
        let result = run(&store, &Filter::kind("family")).unwrap();
        let names: Vec<_> = result
            .listed
            .iter()
            .map(|dc| dc.contact.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        // Display indexes run over the visible subset, not the store.
        assert_eq!(result.listed[1].index, 2);
    }

    #[test]
    fn all_lists_the_full_store_in_order() {
        let store = store();
        let result = run(&store, &Filter::All).unwrap();
        let names: Vec<_> = result
            .listed
            .iter()
            .map(|dc| dc.contact.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(result.filter, Some(Filter::All));
    }

    #[test]
    fn unknown_kind_lists_nothing() {
        let store = store();
        let result = run(&store, &Filter::kind("stranger")).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.kinds, vec!["family", "friend"]);
    }
}
