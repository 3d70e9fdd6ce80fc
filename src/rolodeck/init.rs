use crate::api::{CmdMessage, RolodeckApi, RolodeckPaths};
use crate::config::RolodeckConfig;
use crate::model::default_contacts;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct RolodeckContext {
    pub api: RolodeckApi<FileStore>,
    pub config: RolodeckConfig,
    /// Problems met while starting up, for the client to report.
    pub messages: Vec<CmdMessage>,
}

/// The per-user data directory, or `./Data` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "rolodeck", "rolodeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("Data"))
}

/// Build the API over the contacts document in `data_dir`.
///
/// Never fails: an unreadable config falls back to defaults, a missing
/// document is seeded (when enabled), and an unreadable document leaves the
/// book empty. Each of these is reported through `messages`.
pub fn initialize(data_dir: &Path) -> RolodeckContext {
    let mut messages = Vec::new();

    let config = RolodeckConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        messages.push(CmdMessage::warning(format!(
            "Ignoring unreadable config, using defaults: {}",
            e
        )));
        RolodeckConfig::default()
    });

    let mut store = FileStore::new(data_dir.to_path_buf()).with_file_name(&config.file_name);
    if config.seed_defaults {
        match store.seed(&default_contacts()) {
            Ok(true) => info!(path = %store.data_file().display(), "seeded default contacts"),
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "could not seed default contacts");
                messages.push(CmdMessage::warning(format!(
                    "Could not write default contacts: {}",
                    e
                )));
            }
        }
    }

    let paths = RolodeckPaths {
        data_dir: data_dir.to_path_buf(),
    };
    let api = RolodeckApi::new(store, paths);
    messages.extend(api.startup_messages());

    RolodeckContext {
        api,
        config,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fresh_directory_is_seeded() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("Data");

        let ctx = initialize(&data_dir);
        assert!(ctx.messages.is_empty());
        assert_eq!(ctx.api.book().len(), 5);
        assert!(data_dir.join("contacts.json").exists());
    }

    #[test]
    fn seeding_can_be_disabled() {
        let temp = TempDir::new().unwrap();
        let mut config = RolodeckConfig::default();
        config.seed_defaults = false;
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path());
        assert!(ctx.api.book().is_empty());
        assert!(!temp.path().join("contacts.json").exists());
        // A missing document is still reported.
        assert_eq!(ctx.messages.len(), 1);
    }

    #[test]
    fn corrupt_document_starts_empty_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("contacts.json"), "[{\"name\": ").unwrap();

        let ctx = initialize(temp.path());
        assert!(ctx.api.book().is_empty());
        assert!(ctx.messages[0].content.starts_with("Error loading contacts"));
    }

    #[test]
    fn custom_file_name_is_honoured() {
        let temp = TempDir::new().unwrap();
        let mut config = RolodeckConfig::default();
        config.file_name = "people.json".to_string();
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.config.file_name, "people.json");
        assert!(temp.path().join("people.json").exists());
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "nope").unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.config, RolodeckConfig::default());
        assert!(ctx.messages[0].content.contains("config"));
        assert_eq!(ctx.api.book().len(), 5);
    }

    #[test]
    fn reads_documents_from_the_earlier_format() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("contacts.json"),
            r#"[{"Name":"Brad","Phone":"123-456-7890","Email":""}]"#,
        )
        .unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.api.book().contacts()[0].name, "Brad");
    }
}
