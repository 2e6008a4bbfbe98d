//! Error types for the daily-log bridge.
//!
//! Every failure comes from an external collaborator (vault read/write,
//! daily note creation, settings persistence). Missing configuration is
//! never an error; it falls back to defaults in `settings`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// Daily note could not be created by the vault.
    #[error("Failed to create daily note {path}: {source}")]
    NoteResolution {
        path: String,
        source: std::io::Error,
    },

    /// Note content could not be read from the vault.
    #[error("Failed to read note {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Updated note content could not be written back.
    #[error("Failed to write note {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// Settings file could not be written.
    #[error("Failed to save settings to {path}: {source}")]
    SettingsSave {
        path: String,
        source: std::io::Error,
    },

    /// Settings could not be serialized to JSON.
    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] serde_json::Error),
}
