//! # API Facade
//!
//! Single entry point for all directory operations, regardless of the UI in
//! front of it. The facade:
//!
//! - **Dispatches** every UI action through one `update` function
//! - **Normalizes inputs** (selectors resolve to ids against the current view)
//! - **Owns navigation state** (the active filter)
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! Business logic lives in `commands/*.rs`; the facade only wires actions to
//! commands and keeps the listing consistent after every mutation, the way
//! the list view re-renders after each change.

use crate::commands;
use crate::directory::Filter;
use crate::error::Result;
use crate::index::ContactSelector;
use crate::model::ContactForm;
use crate::route;
use crate::store::ContactStore;

/// An action the UI can dispatch. One enumerated type, one `update` entry
/// point: event sourcing stays in the CLI, state transitions stay here.
#[derive(Debug, Clone)]
pub enum Action {
    List,
    Show(ContactSelector),
    ShowEditForm(ContactSelector),
    Add(ContactForm),
    Edit(ContactSelector, ContactForm),
    Delete(ContactSelector),
    SetFilter(Filter),
    Goto(String),
    Kinds,
}

/// The directory API, generic over the backing store.
pub struct DirectoryApi<S: ContactStore> {
    store: S,
    filter: Filter,
}

impl<S: ContactStore> DirectoryApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            filter: Filter::All,
        }
    }

    /// The active filter (navigation state).
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Dispatches one action to its state transition.
    pub fn update(&mut self, action: Action) -> Result<commands::CmdResult> {
        match action {
            Action::List => self.list(),
            Action::Show(selector) => self.show_contact(&selector),
            Action::ShowEditForm(selector) => self.show_contact(&selector),
            Action::Add(form) => self.add_contact(form),
            Action::Edit(selector, form) => self.edit_contact(&selector, &form),
            Action::Delete(selector) => self.delete_contact(&selector),
            Action::SetFilter(filter) => self.apply_filter(filter),
            Action::Goto(fragment) => self.goto(&fragment),
            Action::Kinds => self.kinds(),
        }
    }

    /// The listing under the current filter.
    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, &self.filter)
    }

    pub fn show_contact(&self, selector: &ContactSelector) -> Result<commands::CmdResult> {
        let id = commands::helpers::resolve_selector(&self.store, &self.filter, selector)?;
        commands::view::run(&self.store, &id)
    }

    /// Adds a contact, then relists so the view stays consistent.
    pub fn add_contact(&mut self, form: ContactForm) -> Result<commands::CmdResult> {
        let mut result = commands::add::run(&mut self.store, form)?;
        result.listed = commands::helpers::visible(&self.store, &self.filter)?;
        result.filter = Some(self.filter.clone());
        Ok(result)
    }

    pub fn edit_contact(
        &mut self,
        selector: &ContactSelector,
        form: &ContactForm,
    ) -> Result<commands::CmdResult> {
        let id = commands::helpers::resolve_selector(&self.store, &self.filter, selector)?;
        commands::edit::run(&mut self.store, &id, form)
    }

    pub fn delete_contact(&mut self, selector: &ContactSelector) -> Result<commands::CmdResult> {
        let id = commands::helpers::resolve_selector(&self.store, &self.filter, selector)?;
        let mut result = commands::delete::run(&mut self.store, &id)?;
        result.listed = commands::helpers::visible(&self.store, &self.filter)?;
        result.filter = Some(self.filter.clone());
        Ok(result)
    }

    /// Applies a filter and records it as the navigation state. Re-applying
    /// the current filter is a no-op on state and safe to repeat.
    pub fn apply_filter(&mut self, filter: Filter) -> Result<commands::CmdResult> {
        let result = commands::filter::run(&self.store, &filter)?;
        self.filter = filter;
        Ok(result)
    }

    /// Routes a URL-style fragment. An unroutable fragment changes nothing
    /// and answers with a warning, matching a router that simply has no
    /// matching pattern.
    pub fn goto(&mut self, fragment: &str) -> Result<commands::CmdResult> {
        match route::parse_fragment(fragment) {
            Some(filter) => self.apply_filter(filter),
            None => {
                let mut result = self.list()?;
                result.add_message(commands::CmdMessage::warning(format!(
                    "No route matches '{}'",
                    fragment
                )));
                Ok(result)
            }
        }
    }

    pub fn kinds(&self) -> Result<commands::CmdResult> {
        commands::kinds::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
