use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodeck", bin_name = "rolodeck", version)]
#[command(about = "Look up, add, update and delete contacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding contacts.json and config.json
    #[arg(
        long,
        global = true,
        env = "ROLODECK_HOME",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find contacts whose name contains a term
    #[command(alias = "find", display_order = 1)]
    Lookup {
        /// Part of a name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List every contact
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Add a contact
    #[command(alias = "a", display_order = 3)]
    Add {
        /// Letters, spaces, apostrophes and hyphens; quote names with spaces
        name: String,

        /// Ten digits, punctuation allowed (e.g. "(123) 456-7890")
        phone: String,
    },

    /// Change the phone number of a contact
    #[command(alias = "u", display_order = 4)]
    Update {
        /// The contact's current number
        current: String,

        /// The new number
        new: String,
    },

    /// Delete the contact holding a phone number
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// The contact's number
        phone: String,
    },

    /// Interactive numbered menu (the default)
    #[command(display_order = 10)]
    Menu,

    /// Create the data directory and contacts file
    #[command(display_order = 20)]
    Init,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (file-name, seed-defaults)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the contacts file
    #[command(display_order = 22)]
    Path,
}
