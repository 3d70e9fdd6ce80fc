use crate::validation::{NameError, PhoneError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodeckError {
    #[error("{0}")]
    InvalidName(#[from] NameError),

    #[error("{0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("Enter an existing number with exactly 10 digits (got '{0}').")]
    InvalidKey(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("That number already exists: {0}")]
    DuplicatePhone(String),

    #[error("That name already exists: {0}. Choose update instead.")]
    DuplicateName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RolodeckError>;
