use serde::{Deserialize, Serialize};

/// A single contact record as stored in the contacts document.
///
/// `email` is carried for compatibility with existing documents and is not
/// read or written by any operation. The capitalized aliases accept files
/// produced by the earlier .NET version of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Phone")]
    pub phone: String,
    #[serde(alias = "Email", default)]
    pub email: String,
}

impl Contact {
    /// Build a contact from already validated parts.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
        }
    }
}

/// Contacts written to a fresh data directory on first run.
pub fn default_contacts() -> Vec<Contact> {
    [
        ("Brad", "123-456-7890"),
        ("Joe", "123-456-9348"),
        ("Julia", "123-456-1223"),
        ("Jesus", "123-456-9937"),
        ("Bryan", "123-456-3967"),
    ]
    .into_iter()
    .map(|(name, phone)| Contact::new(name, phone))
    .collect()
}
