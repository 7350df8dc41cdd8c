use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Fill in at least one field to add a contact")]
    EmptyForm,

    #[error("Contact not found: {0}")]
    ContactNotFound(Uuid),

    #[error("No contact matches {0} in the current view")]
    Selector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
