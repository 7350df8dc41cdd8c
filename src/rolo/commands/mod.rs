use crate::directory::Filter;
use crate::index::DisplayContact;
use crate::model::Contact;

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod helpers;
pub mod kinds;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result every command returns. The CLI renders from this and
/// nothing else; no stdout below the API layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts the command created, changed, or removed.
    pub affected: Vec<Contact>,
    /// The visible subset after the command, with display indexes.
    pub listed: Vec<DisplayContact>,
    /// Available filter values after the command (the dropdown rebuild).
    pub kinds: Vec<String>,
    /// The filter the listing was computed under, when there is one.
    pub filter: Option<Filter>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<DisplayContact>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_kinds(mut self, kinds: Vec<String>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}
