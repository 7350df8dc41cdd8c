//! # Storage Layer
//!
//! The [`ContactStore`] trait is the single owner of contact data: an ordered
//! sequence mutated by append, in-place replace, and remove, all addressed by
//! the contact's stable id. Everything above it works on disposable snapshots.
//!
//! Storage sits behind a trait so the command layer stays decoupled from the
//! backing representation and tests never need anything beyond
//! [`memory::InMemoryStore`]. There is deliberately no persistent backend:
//! the directory is seeded once at startup and lives for the session.
//!
//! Ordering is part of the contract. `snapshot` returns contacts in insertion
//! order, and `replace` keeps the edited entry at its original position, so a
//! filtered view never reshuffles the list underneath the user.

use crate::error::Result;
use crate::model::Contact;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for the contact directory's backing store.
pub trait ContactStore {
    /// Append a contact to the end of the sequence.
    fn add(&mut self, contact: Contact) -> Result<()>;

    /// Get a contact by id.
    fn get(&self, id: &Uuid) -> Result<Contact>;

    /// Replace the contact with the given id, keeping its position.
    fn replace(&mut self, id: &Uuid, contact: Contact) -> Result<()>;

    /// Remove a contact, returning the removed entry.
    fn remove(&mut self, id: &Uuid) -> Result<Contact>;

    /// All contacts in insertion order.
    fn snapshot(&self) -> Result<Vec<Contact>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
