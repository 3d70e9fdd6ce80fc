use super::DataStore;
use crate::error::{RolodeckError, Result};
use crate::model::Contact;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Option<Vec<Contact>>,
    corrupt: bool,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a document.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Some(contacts),
            ..Self::default()
        }
    }

    /// Make `load` fail as if the document were unreadable.
    pub fn corrupt(mut self) -> Self {
        self.corrupt = true;
        self
    }

    /// Make every `save` fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The document as last saved, if any.
    pub fn snapshot(&self) -> Option<&[Contact]> {
        self.contacts.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        if self.corrupt {
            return Err(RolodeckError::Store("document is corrupt".to_string()));
        }
        self.contacts
            .clone()
            .ok_or_else(|| RolodeckError::Store("no document".to_string()))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_writes {
            return Err(RolodeckError::Store("write refused".to_string()));
        }
        self.contacts = Some(contacts.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.contacts.is_some()
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::default_contacts;

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
                store: InMemoryStore::with_contacts(Vec::new()),
            }
        }

        pub fn with_defaults(mut self) -> Self {
            self.store.contacts = Some(default_contacts());
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            self.store
                .contacts
                .get_or_insert_with(Vec::new)
                .push(Contact::new(name, phone));
            self
        }
    }
}
