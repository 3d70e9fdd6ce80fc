use crate::error::{RolodeckError, Result};
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`RolodeckConfig::get`] and [`RolodeckConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["file-name", "seed-defaults"];

/// Configuration for rolodeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodeckConfig {
    /// Name of the contacts document inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Write the default contacts when no document exists yet
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for RolodeckConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            seed_defaults: default_seed(),
        }
    }
}

impl RolodeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodeckError::Io)?;
        let config: RolodeckConfig =
            serde_json::from_str(&content).map_err(RolodeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodeckError::Serialization)?;
        fs::write(config_path, content).map_err(RolodeckError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file-name" => Some(self.file_name.clone()),
            "seed-defaults" => Some(self.seed_defaults.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "file-name" => {
                let name = value.trim();
                if name.is_empty() || name.contains(['/', '\\']) || matches!(name, "." | "..") {
                    return Err(format!("Invalid file name: '{}'", value));
                }
                // The contacts document shares the data directory with this file.
                if name.eq_ignore_ascii_case(CONFIG_FILENAME) {
                    return Err(format!("'{}' is reserved for configuration", name));
                }
                self.file_name = name.to_string();
                Ok(())
            }
            "seed-defaults" => {
                self.seed_defaults = parse_bool(value)
                    .ok_or_else(|| format!("Expected true or false, got '{}'", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
