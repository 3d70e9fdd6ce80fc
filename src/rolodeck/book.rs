//! # Contact Book
//!
//! [`ContactBook`] owns the in-memory collection of contacts and the
//! [`DataStore`] that backs it. Its methods are the only way to change the
//! collection, and every change follows the same steps:
//!
//! 1. validate the input ([`crate::validation`])
//! 2. check it against the current contacts (duplicates, missing keys)
//! 3. mutate the collection
//! 4. save the whole collection
//!
//! If step 4 fails the mutation is undone, so the collection in memory never
//! drifts from the last document written.
//!
//! ## Invariants
//!
//! - No two contacts share the same phone digits.
//! - No two contacts share the same name, ignoring case.
//! - Order is insertion order.
//!
//! ## Loading
//!
//! [`ContactBook::open`] never fails. A missing or unreadable document leaves
//! the book empty and the reason is kept in [`ContactBook::load_warning`] so
//! the client can report it.

use crate::error::{RolodeckError, Result};
use crate::model::Contact;
use crate::store::DataStore;
use crate::validation::{digits, phone_key, validate_name, validate_phone};
use tracing::{debug, warn};

pub struct ContactBook<S: DataStore> {
    store: S,
    contacts: Vec<Contact>,
    load_warning: Option<String>,
}

impl<S: DataStore> ContactBook<S> {
    pub fn open(store: S) -> Self {
        let mut book = Self {
            store,
            contacts: Vec::new(),
            load_warning: None,
        };
        book.reload();
        book
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Make sure a document exists, writing `seed` when it does not. The
    /// collection is reloaded afterwards. Returns true if a document was
    /// written.
    pub fn ensure_document(&mut self, seed: &[Contact]) -> Result<bool> {
        let written = self.store.seed(seed)?;
        if written {
            self.reload();
        }
        Ok(written)
    }

    /// Re-read the collection from the store, with the same recovery as
    /// [`ContactBook::open`].
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(contacts) => {
                self.contacts = contacts;
                self.load_warning = None;
            }
            Err(e) => {
                warn!(error = %e, "could not reload contacts, starting empty");
                self.contacts.clear();
                self.load_warning = Some(format!("Error loading contacts: {}", e));
            }
        }
    }

    /// Contacts whose name contains `term`, ignoring case, sorted by name.
    pub fn lookup(&self, term: &str) -> Vec<Contact> {
        let query = term.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .cloned()
            .collect();
        found.sort_by_cached_key(|c| c.name.to_lowercase());
        found
    }

    /// The contact holding the digits of `phone`.
    pub fn find_by_phone(&self, phone: &str) -> Result<&Contact> {
        let key = key_digits(phone)?;
        self.position(&key)
            .map(|i| &self.contacts[i])
            .ok_or_else(|| RolodeckError::ContactNotFound(phone.trim().to_string()))
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<Contact> {
        let name = validate_name(name)?;
        let phone = validate_phone(phone)?;

        if self.position(&digits(&phone)).is_some() {
            return Err(RolodeckError::DuplicatePhone(phone));
        }
        if self.name_taken(&name) {
            return Err(RolodeckError::DuplicateName(name));
        }

        let contact = Contact::new(name, phone);
        self.contacts.push(contact.clone());
        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }
        Ok(contact)
    }

    /// Replace the phone of the contact holding `current`. Returns the
    /// contact as it was before and after the change.
    pub fn update_phone(&mut self, current: &str, new_phone: &str) -> Result<(Contact, Contact)> {
        let key = key_digits(current)?;
        let index = self
            .position(&key)
            .ok_or_else(|| RolodeckError::ContactNotFound(current.trim().to_string()))?;

        let new_phone = validate_phone(new_phone)?;
        let new_digits = digits(&new_phone);
        let taken = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && digits(&c.phone) == new_digits);
        if taken {
            return Err(RolodeckError::DuplicatePhone(new_phone));
        }

        let before = self.contacts[index].clone();
        self.contacts[index].phone = new_phone;
        if let Err(e) = self.persist() {
            self.contacts[index] = before;
            return Err(e);
        }
        Ok((before, self.contacts[index].clone()))
    }

    /// Remove every contact holding the digits of `phone`.
    pub fn remove(&mut self, phone: &str) -> Result<Vec<Contact>> {
        let key = key_digits(phone)?;
        let previous = self.contacts.clone();

        let (removed, kept): (Vec<Contact>, Vec<Contact>) = previous
            .iter()
            .cloned()
            .partition(|c| digits(&c.phone) == key);
        if removed.is_empty() {
            return Err(RolodeckError::ContactNotFound(phone.trim().to_string()));
        }

        self.contacts = kept;
        if let Err(e) = self.persist() {
            self.contacts = previous;
            return Err(e);
        }
        Ok(removed)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.contacts.iter().position(|c| digits(&c.phone) == key)
    }

    fn name_taken(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.contacts.iter().any(|c| c.name.to_lowercase() == lowered)
    }

    fn persist(&mut self) -> Result<()> {
        debug!(count = self.contacts.len(), "persisting contacts");
        self.store.save(&self.contacts)
    }
}

fn key_digits(input: &str) -> Result<String> {
    phone_key(input).ok_or_else(|| RolodeckError::InvalidKey(input.trim().to_string()))
}
