//! Daily note resolution.
//!
//! Derives the vault path of a date's daily note from the vault's
//! daily-notes settings and hands the creation of missing notes off to
//! the vault itself.

use chrono::NaiveDate;

use crate::error::LogError;
use crate::timefmt;
use crate::vault::{DailyNoteSettings, NoteHandle, Vault};

/// Vault path of the daily note for `date`: `{folder}/{formatted date}.md`.
pub fn daily_note_path(settings: &DailyNoteSettings, date: NaiveDate) -> String {
    let fmt = timefmt::to_strftime(&settings.format);
    format!("{}/{}.md", settings.folder, date.format(&fmt))
}

/// Return the daily note for `date`, asking the vault to create it if it
/// does not exist yet. A creation failure propagates; there is no retry.
pub async fn resolve_daily_note(
    vault: &dyn Vault,
    date: NaiveDate,
) -> Result<NoteHandle, LogError> {
    let settings = vault.daily_note_settings();
    let path = daily_note_path(&settings, date);

    match vault.get_file_by_path(&path).await {
        Some(note) => Ok(note),
        None => vault.create_daily_note(date).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockVault;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()
    }

    fn settings() -> DailyNoteSettings {
        DailyNoteSettings {
            folder: "daily".to_string(),
            format: "YYYY-MM-DD".to_string(),
        }
    }

    #[test]
    fn test_daily_note_path() {
        assert_eq!(daily_note_path(&settings(), day()), "daily/2024-01-09.md");
    }

    #[test]
    fn test_daily_note_path_empty_folder() {
        let s = DailyNoteSettings {
            folder: String::new(),
            format: "YYYY-MM-DD".to_string(),
        };
        assert_eq!(daily_note_path(&s, day()), "/2024-01-09.md");
    }

    #[test]
    fn test_daily_note_path_custom_format() {
        let s = DailyNoteSettings {
            folder: "journal".to_string(),
            format: "DD.MM.YYYY".to_string(),
        };
        assert_eq!(daily_note_path(&s, day()), "journal/09.01.2024.md");
    }

    #[tokio::test]
    async fn test_resolve_returns_existing_note_without_creating() {
        let vault = MockVault::new(settings()).with_note("daily/2024-01-09.md", "existing\n");

        let note = resolve_daily_note(&vault, day()).await.unwrap();
        assert_eq!(note.path(), "daily/2024-01-09.md");
        assert_eq!(vault.created_count(), 0);
    }

    #[tokio::test]
    async fn test_resolve_creates_missing_note() {
        let vault = MockVault::new(settings());

        let note = resolve_daily_note(&vault, day()).await.unwrap();
        assert_eq!(note.path(), "daily/2024-01-09.md");
        assert_eq!(vault.created_count(), 1);
        assert_eq!(vault.note("daily/2024-01-09.md"), Some(String::new()));
    }

    #[tokio::test]
    async fn test_resolve_twice_is_idempotent() {
        let vault = MockVault::new(settings());

        let first = resolve_daily_note(&vault, day()).await.unwrap();
        let second = resolve_daily_note(&vault, day()).await.unwrap();

        assert_eq!(first, second);
        // Second call finds the note created by the first
        assert_eq!(vault.created_count(), 1);
    }

    #[tokio::test]
    async fn test_creation_failure_propagates() {
        let vault = MockVault::new(settings()).failing_creation();

        let err = resolve_daily_note(&vault, day()).await.unwrap_err();
        assert!(matches!(err, LogError::NoteResolution { .. }));
    }
}
