use super::ContactStore;
use crate::error::{Result, RoloError};
use crate::model::Contact;
use uuid::Uuid;

/// In-memory contact store. The only backend: the directory is transient by
/// design, living exactly as long as the session that seeded it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    fn position(&self, id: &Uuid) -> Result<usize> {
        self.contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or(RoloError::ContactNotFound(*id))
    }
}

impl ContactStore for InMemoryStore {
    fn add(&mut self, contact: Contact) -> Result<()> {
        self.contacts.push(contact);
        Ok(())
    }

    fn get(&self, id: &Uuid) -> Result<Contact> {
        let pos = self.position(id)?;
        Ok(self.contacts[pos].clone())
    }

    fn replace(&mut self, id: &Uuid, contact: Contact) -> Result<()> {
        let pos = self.position(id)?;
        self.contacts[pos] = contact;
        Ok(())
    }

    fn remove(&mut self, id: &Uuid) -> Result<Contact> {
        let pos = self.position(id)?;
        Ok(self.contacts.remove(pos))
    }

    fn snapshot(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, kind: &str) -> Self {
            let contact = Contact::new(
                name.to_string(),
                format!("{} Street", name),
                "0123456789".to_string(),
                "anemail@me.com".to_string(),
                kind.to_string(),
                None,
            );
            self.store.add(contact).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn replace_keeps_position() {
        let fixture = StoreFixture::new()
            .with_contact("First", "family")
            .with_contact("Second", "friend")
            .with_contact("Third", "family");
        let mut store = fixture.store;

        let snapshot = store.snapshot().unwrap();
        let mut edited = snapshot[1].clone();
        edited.name = "Second, renamed".to_string();
        let id = edited.id;
        store.replace(&id, edited).unwrap();

        let after = store.snapshot().unwrap();
        assert_eq!(after[0].name, "First");
        assert_eq!(after[1].name, "Second, renamed");
        assert_eq!(after[2].name, "Third");
    }

    #[test]
    fn remove_returns_entry_and_shrinks() {
        let mut store = StoreFixture::new()
            .with_contact("A", "family")
            .with_contact("B", "friend")
            .store;

        let id = store.snapshot().unwrap()[0].id;
        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot().unwrap()[0].name, "B");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get(&id),
            Err(RoloError::ContactNotFound(_))
        ));
        assert!(matches!(
            store.remove(&id),
            Err(RoloError::ContactNotFound(_))
        ));
    }
}
