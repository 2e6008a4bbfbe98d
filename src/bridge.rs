//! The bot-to-vault bridge.
//!
//! `DailyLogBridge` owns the session state and the injected [`Vault`],
//! and implements the three handler kinds the bot framework dispatches
//! into: commands, plain text, and files. Replies follow the host
//! framework's cooperation contract: a handler that logged a message
//! still reports `processed: false`, so other subscribers of the same
//! event get their turn.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tracing::debug;

use crate::daily;
use crate::error::LogError;
use crate::section;
use crate::session::SessionState;
use crate::settings::Settings;
use crate::timefmt;
use crate::vault::{NoteHandle, Vault};

/// Capability unit name the bridge registers under.
pub const UNIT_NAME: &str = "daily-logs";

/// Command arming the one-shot "log the next message" flag.
pub const CMD_ADD_LOG: &str = "add_log_to_daily";

/// Command toggling capture-all mode.
pub const CMD_TOGGLE_CAPTURE: &str = "toggle_income_to_daily_log";

const PROMPT_REPLY: &str = "Введите текст или отправьте файл";
const CAPTURE_MODE_SUFFIX: &str =
    " режим 'записывать все входящие сообщения в daily заметки'";

/// Outcome of one handler invocation, as seen by the bot framework.
///
/// `processed: true` claims the event and stops downstream handlers;
/// `answer` is sent back to the chat when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    pub processed: bool,
    pub answer: Option<String>,
}

impl HandlerResult {
    /// Decline the event: not processed, nothing to say.
    pub fn ignored() -> Self {
        Self {
            processed: false,
            answer: None,
        }
    }

    fn claimed(answer: impl Into<String>) -> Self {
        Self {
            processed: true,
            answer: Some(answer.into()),
        }
    }
}

/// Event surface the bot framework dispatches into.
///
/// One implementor per capability unit; the framework passes
/// `processed_before = true` when an earlier unit already claimed the
/// event.
#[async_trait]
pub trait EventHandlers {
    async fn on_command(
        &mut self,
        command: &str,
        processed_before: bool,
    ) -> Result<HandlerResult, LogError>;

    async fn on_text(
        &mut self,
        text: &str,
        processed_before: bool,
    ) -> Result<HandlerResult, LogError>;

    async fn on_file(
        &mut self,
        file: &NoteHandle,
        processed_before: bool,
        caption: Option<&str>,
    ) -> Result<HandlerResult, LogError>;
}

/// Coordinator appending bot messages to the daily note's log section.
pub struct DailyLogBridge {
    vault: Arc<dyn Vault>,
    settings: Settings,
    state: SessionState,
}

impl DailyLogBridge {
    pub fn new(vault: Arc<dyn Vault>, settings: Settings) -> Self {
        Self {
            vault,
            settings,
            state: SessionState::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Append `message` to today's log section and return the note it
    /// landed in. Resolve, read, splice, write — each step an external
    /// call, with no coordination across the cycle.
    pub async fn add_daily_log(&self, message: &str) -> Result<NoteHandle, LogError> {
        let note = daily::resolve_daily_note(self.vault.as_ref(), Local::now().date_naive()).await?;

        let content = self.vault.read(&note).await?;
        let updated = section::append_to_section(&content, &self.settings.section_name, message);
        self.vault.modify(&note, &updated).await?;

        Ok(note)
    }

    fn timestamp(&self) -> String {
        let fmt = timefmt::to_strftime(&self.settings.timestamp_format);
        Local::now().format(&fmt).to_string()
    }
}

#[async_trait]
impl EventHandlers for DailyLogBridge {
    async fn on_command(
        &mut self,
        command: &str,
        processed_before: bool,
    ) -> Result<HandlerResult, LogError> {
        match command {
            CMD_ADD_LOG => {
                debug!(command, "received command");
                if processed_before || self.state.is_awaiting_text() {
                    return Ok(HandlerResult::ignored());
                }
                self.state.begin_awaiting_text();
                Ok(HandlerResult::claimed(PROMPT_REPLY))
            }
            CMD_TOGGLE_CAPTURE => {
                debug!(command, "received command");
                if processed_before || self.state.is_awaiting_text() {
                    return Ok(HandlerResult::ignored());
                }
                let on = self.state.toggle_capture_all();
                let on_off = if on { "Включен" } else { "Выключен" };
                Ok(HandlerResult::claimed(format!(
                    "{}{}",
                    on_off, CAPTURE_MODE_SUFFIX
                )))
            }
            _ => Ok(HandlerResult::ignored()),
        }
    }

    async fn on_text(
        &mut self,
        text: &str,
        _processed_before: bool,
    ) -> Result<HandlerResult, LogError> {
        if !self.state.should_capture() {
            return Ok(HandlerResult::ignored());
        }

        let entry = format!("{}:\n{}\n", self.timestamp(), text);
        let note = self.add_daily_log(&entry).await?;
        self.state.consume_awaiting_text();

        // processed stays false: logged, but other units may still react
        Ok(HandlerResult {
            processed: false,
            answer: Some(format!(
                "Запись добавлена в ежедневную заметку ({})",
                note.path()
            )),
        })
    }

    async fn on_file(
        &mut self,
        file: &NoteHandle,
        _processed_before: bool,
        caption: Option<&str>,
    ) -> Result<HandlerResult, LogError> {
        if !self.state.should_capture() {
            return Ok(HandlerResult::ignored());
        }

        let mut entry = format!("\n{}:\n![[{}]]\n", self.timestamp(), file.name());
        if let Some(caption) = caption.filter(|c| !c.is_empty()) {
            entry.push_str(caption);
            entry.push('\n');
        }

        let note = self.add_daily_log(&entry).await?;
        self.state.consume_awaiting_text();

        Ok(HandlerResult {
            processed: false,
            answer: Some(format!(
                "Файл сохранен в {}, ссылка добавлена в {}",
                file.name(),
                note.path()
            )),
        })
    }
}
