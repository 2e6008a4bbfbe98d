//! The note vault collaborator.
//!
//! `Vault` is the typed seam to the external note store. The bridge only
//! ever reads a note, writes it back, looks a path up, and asks for a
//! daily note to be created; everything else the store does is out of
//! scope. `FsVault` maps vault paths onto a plain directory tree.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daily;
use crate::error::LogError;

/// Opaque reference to a note inside the vault.
///
/// The path is vault-relative and slash-separated regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteHandle {
    path: String,
}

impl NoteHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name component of the path.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Where daily notes live and how their file names are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyNoteSettings {
    /// Vault folder holding daily notes ("" = vault root)
    pub folder: String,
    /// File name date format (moment-style)
    pub format: String,
}

impl Default for DailyNoteSettings {
    fn default() -> Self {
        Self {
            folder: String::new(),
            format: "YYYY-MM-DD".to_string(),
        }
    }
}

/// External note store, injected into the bridge at startup.
///
/// Consumers hold an `Arc<dyn Vault>`. Each method is an independent
/// asynchronous step; nothing here coordinates a read-modify-write
/// cycle, that is the caller's concern.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Read the full text content of a note.
    async fn read(&self, note: &NoteHandle) -> Result<String, LogError>;

    /// Replace the full text content of a note.
    async fn modify(&self, note: &NoteHandle, content: &str) -> Result<(), LogError>;

    /// Look up an existing note by vault path.
    async fn get_file_by_path(&self, path: &str) -> Option<NoteHandle>;

    /// Create the daily note for `date` and return its handle.
    async fn create_daily_note(&self, date: NaiveDate) -> Result<NoteHandle, LogError>;

    /// Daily-notes location configuration of this vault.
    fn daily_note_settings(&self) -> DailyNoteSettings;
}

/// Filesystem-backed vault rooted at a directory.
pub struct FsVault {
    root: PathBuf,
    daily: DailyNoteSettings,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>, daily: DailyNoteSettings) -> Self {
        Self {
            root: root.into(),
            daily,
        }
    }

    fn absolute(&self, vault_path: &str) -> PathBuf {
        self.root.join(vault_path.trim_start_matches('/'))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn read(&self, note: &NoteHandle) -> Result<String, LogError> {
        tokio::fs::read_to_string(self.absolute(note.path()))
            .await
            .map_err(|e| LogError::Read {
                path: note.path().to_string(),
                source: e,
            })
    }

    async fn modify(&self, note: &NoteHandle, content: &str) -> Result<(), LogError> {
        tokio::fs::write(self.absolute(note.path()), content)
            .await
            .map_err(|e| LogError::Write {
                path: note.path().to_string(),
                source: e,
            })
    }

    async fn get_file_by_path(&self, path: &str) -> Option<NoteHandle> {
        match tokio::fs::metadata(self.absolute(path)).await {
            Ok(meta) if meta.is_file() => Some(NoteHandle::new(path)),
            _ => None,
        }
    }

    async fn create_daily_note(&self, date: NaiveDate) -> Result<NoteHandle, LogError> {
        let path = daily::daily_note_path(&self.daily, date);
        let absolute = self.absolute(&path);

        let resolution_err = |e| LogError::NoteResolution {
            path: path.clone(),
            source: e,
        };

        if let Some(parent) = absolute.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(resolution_err)?;
        }
        tokio::fs::write(&absolute, "").await.map_err(resolution_err)?;

        Ok(NoteHandle::new(path))
    }

    fn daily_note_settings(&self) -> DailyNoteSettings {
        self.daily.clone()
    }
}
