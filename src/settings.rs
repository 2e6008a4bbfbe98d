//! Plugin settings with JSON persistence.
//!
//! Settings are merged over built-in defaults: a missing file, invalid
//! JSON, or a partial object all resolve transparently via `serde`
//! defaults. Loading never fails; only saving can.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Default timestamp format for log entries (moment-style tokens).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Default header of the log section inside a daily note.
pub const DEFAULT_SECTION_NAME: &str = "# Лог";

/// User-configurable settings of the daily-log bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Format of the timestamp line above each log entry (moment-style)
    pub timestamp_format: String,
    /// Header line of the section log entries are appended under
    pub section_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            section_name: DEFAULT_SECTION_NAME.to_string(),
        }
    }
}

/// File-backed settings persistence.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk, falling back to defaults for anything
    /// missing or unreadable.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }

    /// Save settings to disk as pretty-printed JSON.
    pub fn save(&self, settings: &Settings) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LogError::SettingsSave {
                path: self.path.display().to_string(),
                source: e,
            })?;
        }

        let contents = serde_json::to_string_pretty(settings)?;

        fs::write(&self.path, contents).map_err(|e| LogError::SettingsSave {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
