//! User settings, loaded from `<config dir>/tabledesk/settings.json`.
//!
//! Every field has a default, so a partial or missing file is fine. An
//! unreadable file is logged and replaced by defaults.

use crate::constants::EXPORT_FILE_NAME;
use crate::types::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme the table opens with
    pub theme: ThemeMode,
    /// CSV import behaviour
    pub import: ImportSettings,
    /// Filename handed to the saver on export
    pub export_file_name: String,
    /// Where column preferences are stored; `None` uses the data dir
    pub store_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            import: ImportSettings::default(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            store_path: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Append a visible column for every CSV header the table does not know yet
    pub create_missing_columns: bool,
}

impl Settings {
    /// `<config dir>/tabledesk/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tabledesk").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings {:?}: {}", path, e);
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Invalid settings file {:?}, using defaults: {}", path, e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
