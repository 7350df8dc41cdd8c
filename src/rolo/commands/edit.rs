use crate::commands::{CmdMessage, CmdResult};
use crate::directory;
use crate::error::Result;
use crate::model::ContactForm;
use crate::store::ContactStore;
use uuid::Uuid;

/// Saves an edit: every field present in the form replaces the attribute,
/// blank fields reset to defaults, and a blank photo clears back to the
/// placeholder. The contact keeps its position in the store.
pub fn run<S: ContactStore>(store: &mut S, id: &Uuid, form: &ContactForm) -> Result<CmdResult> {
    let kinds_before = directory::kinds(&store.snapshot()?);
    let mut contact = store.get(id)?;
    form.apply_to(&mut contact);
    store.replace(id, contact.clone())?;
    let kinds_after = directory::kinds(&store.snapshot()?);

    let mut result = CmdResult::default().with_kinds(kinds_after.clone());
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {}",
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
    for gone in kinds_before
        .iter()
        .filter(|k| !kinds_after.iter().any(|a| a.eq_ignore_ascii_case(k)))
    {
        result.add_message(CmdMessage::info(format!(
            "Filter value no longer offered: {}",
            gone
        )));
    }
    result.affected.push(contact);
    Ok(result)
}
