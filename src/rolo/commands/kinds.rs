use crate::commands::CmdResult;
use crate::directory;
use crate::error::Result;
use crate::store::ContactStore;

/// The filter values currently on offer, rebuilt in full from the store.
pub fn run<S: ContactStore>(store: &S) -> Result<CmdResult> {
    let kinds = directory::kinds(&store.snapshot()?);
    Ok(CmdResult::default().with_kinds(kinds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_offers_no_kinds() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().kinds.is_empty());
    }

    #[test]
    fn kinds_follow_store_order() {
        let store = StoreFixture::new()
            .with_contact("A", "colleague")
            .with_contact("B", "family")
            .store;
        assert_eq!(run(&store).unwrap().kinds, vec!["colleague", "family"]);
    }
}
