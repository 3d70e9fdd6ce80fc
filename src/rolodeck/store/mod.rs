//! # Storage Layer
//!
//! This module defines the storage abstraction for rolodeck. The [`DataStore`]
//! trait lets the contact book persist through different backends.
//!
//! A backend deals in whole documents only: [`DataStore::load`] returns the
//! entire ordered collection and [`DataStore::save`] replaces it. There is no
//! incremental write; the contact book calls `save` after every successful
//! mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One pretty-printed JSON array, `contacts.json` by default
//!   - Lives in the data directory next to `config.json`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate corrupt documents and failing writes
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── contacts.json   # [{ "name": ..., "phone": ..., "email": ... }, ...]
//! └── config.json     # Configuration
//! ```

use crate::error::Result;
use crate::model::Contact;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for contact storage.
pub trait DataStore {
    /// Read the whole collection. Fails if the document is missing or corrupt.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Replace the whole collection.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Whether a document currently exists.
    fn exists(&self) -> bool;

    /// Where the document lives, for file-based stores.
    fn location(&self) -> Option<PathBuf>;

    /// Write `defaults` if no document exists yet. Returns true if it seeded.
    fn seed(&mut self, defaults: &[Contact]) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(defaults)?;
        Ok(true)
    }
}
