//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for rolodeck operations, whichever client drives it: the
//! one-shot subcommands and the interactive menu both go through here.
//!
//! The facade:
//! - **Owns** the [`ContactBook`] for the session
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules of its own.
//!
//! ## Generic Over DataStore
//!
//! `RolodeckApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RolodeckApi<FileStore>`
//! - Testing: `RolodeckApi<InMemoryStore>`

use crate::book::ContactBook;
use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

/// The main API facade for rolodeck operations.
pub struct RolodeckApi<S: DataStore> {
    book: ContactBook<S>,
    paths: commands::RolodeckPaths,
}

impl<S: DataStore> RolodeckApi<S> {
    pub fn new(store: S, paths: commands::RolodeckPaths) -> Self {
        Self {
            book: ContactBook::open(store),
            paths,
        }
    }

    /// Messages the client should show once, before the first operation.
    pub fn startup_messages(&self) -> Vec<commands::CmdMessage> {
        self.book
            .load_warning()
            .map(|w| vec![commands::CmdMessage::warning(w)])
            .unwrap_or_default()
    }

    pub fn lookup(&self, term: &str) -> Result<commands::CmdResult> {
        commands::lookup::run(&self.book, term)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn resolve_phone(&self, phone: &str) -> Result<commands::CmdResult> {
        commands::resolve::run(&self.book, phone)
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn update(&mut self, current: &str, new_phone: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.book, current, new_phone)
    }

    pub fn remove(&mut self, phone: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.book, phone)
    }

    pub fn contact_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.book)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self, seed_defaults: bool) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.book, &self.paths, seed_defaults)
    }

    pub fn paths(&self) -> &commands::RolodeckPaths {
        &self.paths
    }

    pub fn book(&self) -> &ContactBook<S> {
        &self.book
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RolodeckPaths};
