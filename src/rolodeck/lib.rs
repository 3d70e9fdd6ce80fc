//! # Rolodeck Architecture
//!
//! Rolodeck is a small contact book: names and ten-digit phone numbers, kept in
//! a JSON document and edited through validated operations. The library holds
//! every rule; the `rolodeck` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive numbered menu            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's ContactBook                           │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns book outcomes into results and messages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Contact Book (book.rs) + Validation (validation.rs)        │
//! │  - validate -> check conflicts -> mutate -> save            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait; FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns plain Rust
//! types. It never writes to stdout or stderr and never exits the process.
//! Diagnostics go through `tracing`; anything the operator must see travels
//! back as a [`commands::CmdMessage`].
//!
//! ## Errors
//!
//! Every rejection is a typed [`error::RolodeckError`]. Input problems carry
//! the underlying [`validation::NameError`] or [`validation::PhoneError`].
//! A failed load is not an error: the book starts empty and says why.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`book`]: The contact book and its invariants
//! - [`commands`]: One module per operation
//! - [`validation`]: Name and phone rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Contact` record and the default contacts
//! - [`config`]: Configuration stored next to the contacts
//! - [`init`]: Data directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
