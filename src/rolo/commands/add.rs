use crate::commands::{CmdMessage, CmdResult};
use crate::directory;
use crate::error::{Result, RoloError};
use crate::model::ContactForm;
use crate::store::ContactStore;

/// Adds a contact built from the form's populated fields. A form with nothing
/// filled in is the one recognized user error and leaves the store untouched.
pub fn run<S: ContactStore>(store: &mut S, form: ContactForm) -> Result<CmdResult> {
    if form.is_empty() {
        return Err(RoloError::EmptyForm);
    }

    let kinds_before = directory::kinds(&store.snapshot()?);
    let contact = form.into_contact();
    store.add(contact.clone())?;
    let kinds_after = directory::kinds(&store.snapshot()?);

    let mut result = CmdResult::default().with_kinds(kinds_after);
    result.add_message(CmdMessage::success(format!(
        "Contact added: {}",
        contact.name
    )));
    if !kinds_before
        .iter()
        .any(|k| k.eq_ignore_ascii_case(&contact.kind))
    {
        result.add_message(CmdMessage::info(format!(
            "New filter value available: {}",
            contact.kind
        )));
    }
    result.affected.push(contact);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_KIND;
    use crate::store::memory::InMemoryStore;

    fn form(name: &str, kind: Option<&str>) -> ContactForm {
        ContactForm {
            name: Some(name.to_string()),
            kind: kind.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn empty_form_is_rejected_without_mutation() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, ContactForm::default()).unwrap_err();
        assert!(matches!(err, RoloError::EmptyForm));
        assert_eq!(store.len(), 0);

        // All-blank counts as empty too.
        let blank = ContactForm {
            name: Some("".into()),
            email: Some("  ".into()),
            ..Default::default()
        };
        assert!(run(&mut store, blank).is_err());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn appends_contact_with_defaults() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, form("Ada", None)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(result.affected[0].kind, DEFAULT_KIND);
    }

    #[test]
    fn unseen_kind_appears_exactly_once() {
        let mut store = InMemoryStore::new();
        run(&mut store, form("Ada", Some("colleague"))).unwrap();
        let result = run(&mut store, form("Grace", Some("Colleague"))).unwrap();

        let hits = result
            .kinds
            .iter()
            .filter(|k| k.eq_ignore_ascii_case("colleague"))
            .count();
        assert_eq!(hits, 1);
        // First add of a kind announces it; a case-variant repeat does not.
        assert!(!result
            .messages
            .iter()
            .any(|m| m.content.contains("New filter value")));
    }
}
