use super::DataStore;
use crate::error::{RolodeckError, Result};
use crate::model::Contact;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_FILE_NAME: &str = "contacts.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        if !name.trim().is_empty() {
            self.file_name = name.trim().to_string();
        }
        self
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RolodeckError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        let path = self.data_file();
        let content = fs::read_to_string(&path).map_err(RolodeckError::Io)?;
        // A literal `null` document is treated as an empty book.
        let contacts: Option<Vec<Contact>> =
            serde_json::from_str(&content).map_err(RolodeckError::Serialization)?;
        let contacts = contacts.unwrap_or_default();
        debug!(path = %path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_file();
        let content =
            serde_json::to_string_pretty(contacts).map_err(RolodeckError::Serialization)?;
        fs::write(&path, content).map_err(RolodeckError::Io)?;
        debug!(path = %path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.data_file().exists()
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.data_file())
    }
}
