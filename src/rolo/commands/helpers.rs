use crate::directory::{self, Filter};
use crate::error::Result;
use crate::index::{index_contacts, resolve, ContactSelector, DisplayContact};
use crate::store::ContactStore;
use uuid::Uuid;

/// The indexed visible subset for a filter, in one step.
pub fn visible<S: ContactStore>(store: &S, filter: &Filter) -> Result<Vec<DisplayContact>> {
    let snapshot = store.snapshot()?;
    Ok(index_contacts(directory::apply(&snapshot, filter)))
}

/// Resolves a selector against the visible subset under `filter`.
pub fn resolve_selector<S: ContactStore>(
    store: &S,
    filter: &Filter,
    selector: &ContactSelector,
) -> Result<Uuid> {
    let view = visible(store, filter)?;
    resolve(&view, selector)
}
