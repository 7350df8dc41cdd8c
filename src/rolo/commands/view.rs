use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;
use uuid::Uuid;

/// Fetches one contact for display. Read-only: viewing (or opening the edit
/// form and walking away) never touches the store.
pub fn run<S: ContactStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let contact = store.get(id)?;
    let mut result = CmdResult::default();
    result.affected.push(contact);
    Ok(result)
}
