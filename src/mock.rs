//! In-memory vault for testing bridge consumers.
//!
//! Holds notes in a map, tracks daily-note creations, and can be told to
//! fail creation to exercise error paths. No filesystem access.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::daily;
use crate::error::LogError;
use crate::vault::{DailyNoteSettings, NoteHandle, Vault};

/// Mock implementation of [`Vault`] backed by a `HashMap`.
pub struct MockVault {
    daily: DailyNoteSettings,
    notes: Mutex<HashMap<String, String>>,
    fail_creation: AtomicBool,
    created: AtomicUsize,
}

impl MockVault {
    pub fn new(daily: DailyNoteSettings) -> Self {
        Self {
            daily,
            notes: Mutex::new(HashMap::new()),
            fail_creation: AtomicBool::new(false),
            created: AtomicUsize::new(0),
        }
    }

    /// Seed the vault with a note.
    pub fn with_note(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.notes
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Make every subsequent `create_daily_note` call fail.
    pub fn failing_creation(self) -> Self {
        self.fail_creation.store(true, Ordering::Relaxed);
        self
    }

    /// Current content of a note, if present.
    pub fn note(&self, path: &str) -> Option<String> {
        self.notes.lock().unwrap().get(path).cloned()
    }

    /// Number of daily notes created so far.
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }
}

impl Default for MockVault {
    fn default() -> Self {
        Self::new(DailyNoteSettings::default())
    }
}

#[async_trait]
impl Vault for MockVault {
    async fn read(&self, note: &NoteHandle) -> Result<String, LogError> {
        self.note(note.path()).ok_or_else(|| LogError::Read {
            path: note.path().to_string(),
            source: std::io::Error::other("no such note"),
        })
    }

    async fn modify(&self, note: &NoteHandle, content: &str) -> Result<(), LogError> {
        self.notes
            .lock()
            .unwrap()
            .insert(note.path().to_string(), content.to_string());
        Ok(())
    }

    async fn get_file_by_path(&self, path: &str) -> Option<NoteHandle> {
        self.notes
            .lock()
            .unwrap()
            .contains_key(path)
            .then(|| NoteHandle::new(path))
    }

    async fn create_daily_note(&self, date: NaiveDate) -> Result<NoteHandle, LogError> {
        let path = daily::daily_note_path(&self.daily, date);

        if self.fail_creation.load(Ordering::Relaxed) {
            return Err(LogError::NoteResolution {
                path,
                source: std::io::Error::other("creation disabled"),
            });
        }

        self.notes.lock().unwrap().insert(path.clone(), String::new());
        self.created.fetch_add(1, Ordering::Relaxed);
        Ok(NoteHandle::new(path))
    }

    fn daily_note_settings(&self) -> DailyNoteSettings {
        self.daily.clone()
    }
}
