use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::SettingsError;

// Skill data lives next to the working directory, like the riddles and the log.
pub const DATA_DIR: &str = "./data";
pub const SETTINGS_PATH: &str = "./data/settings.json";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
// OpenAI-compatible chat completion endpoint of the Gemini API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LANG: &str = "en-us";

// Skill settings. Missing fields in a stored file are filled with defaults on load.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub model: String, // Chat model used for every new game.
    #[serde(alias = "gemini_api_key")]
    pub api_key: String, // Empty until the user configures a key.
    pub api_base: String,
    pub lang: String, // Language used when a question arrives before any game was started.
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Settings {
    /// The configured credential, if any.
    pub fn credential(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }

    pub fn load() -> Result<Self, SettingsError> {
        Self::load_or_create(SETTINGS_PATH)
    }

    // Load settings, writing the defaults (with an empty key) when no file exists yet.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            let settings = Self::default();
            settings.save_to_file(path)?;
            log::info!("Stored default settings at {}", path.display());
            return Ok(settings);
        }
        Self::load_settings_from_file(path)
    }

    pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }
}
