use crate::commands::{CmdMessage, CmdResult};
use crate::directory;
use crate::error::Result;
use crate::store::ContactStore;
use uuid::Uuid;

/// Removes a contact. When the last contact of a category goes, the category
/// disappears from the filter values and that is called out to the user.
pub fn run<S: ContactStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let removed = store.remove(id)?;
    let kinds_after = directory::kinds(&store.snapshot()?);

    let mut result = CmdResult::default().with_kinds(kinds_after.clone());
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {}",
        removed.name
    )));
    if !kinds_after
        .iter()
        .any(|k| k.eq_ignore_ascii_case(&removed.kind))
    {
        result.add_message(CmdMessage::info(format!(
            "Filter value no longer offered: {}",
            removed.kind.to_lowercase()
        )));
    }
    result.affected.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::ContactStore;

    #[test]
    fn deleting_last_of_a_kind_drops_the_filter_value() {
        let mut store = StoreFixture::new()
            .with_contact("A", "family")
            .with_contact("B", "friend")
            .store;
        let id = store.snapshot().unwrap()[1].id;

        let result = run(&mut store, &id).unwrap();
        assert_eq!(result.kinds, vec!["family"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("no longer offered: friend")));
    }

    #[test]
    fn deleting_non_last_of_a_shared_kind_keeps_it() {
        let mut store = StoreFixture::new()
            .with_contact("A", "family")
            .with_contact("B", "family")
            .store;
        let id = store.snapshot().unwrap()[0].id;

        let result = run(&mut store, &id).unwrap();
        assert_eq!(result.kinds, vec!["family"]);
        assert!(!result
            .messages
            .iter()
            .any(|m| m.content.contains("no longer offered")));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = StoreFixture::new().with_contact("A", "family").store;
        assert!(run(&mut store, &Uuid::new_v4()).is_err());
        assert_eq!(store.len(), 1);
    }
}
