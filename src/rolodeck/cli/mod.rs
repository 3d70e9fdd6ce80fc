//! # CLI Behavior
//!
//! This is **one possible UI client** for rolodeck, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Naked Execution (`rolodeck`)
//!
//! Running `rolodeck` with no subcommand opens the numbered menu
//! (Lookup / Add / Update / Delete / Exit), same as `rolodeck menu`. The menu
//! reads stdin line by line, so it can also be scripted:
//!
//! ```text
//! printf '1\nbr\n5\n' | rolodeck
//! ```
//!
//! ## One-shot Subcommands
//!
//! `lookup`, `list`, `add`, `update`, `delete`, `init`, `config` and `path`
//! run a single operation and exit. A rejected operation prints `Error: ...`
//! to stderr and exits with status 1.
//!
//! ## Where Contacts Live
//!
//! `--data-dir` (or `ROLODECK_HOME`) picks the data directory; otherwise the
//! platform data directory is used. On first run the contacts file is seeded
//! with a handful of sample contacts unless `seed-defaults` is off.

mod commands;
mod menu;
mod render;
mod setup;

pub use commands::run;
