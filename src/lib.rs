//! daily-logs — bot-to-vault bridge for daily note logging.
//!
//! Listens to chat-bot events (commands, text, files) and appends
//! timestamped log entries into a configurable section of the day's note.
//! The vault storage and the bot transport are external collaborators:
//! the vault is injected as [`vault::Vault`], and the bot framework
//! dispatches events into [`bridge::EventHandlers`].
//!
//! The flow for each logged message: resolve today's note (creating it if
//! absent), read it, splice the entry into the log section, write it
//! back. The cycle is uncoordinated; concurrent external edits follow
//! last-writer-wins.

pub mod bridge;
pub mod daily;
pub mod error;
pub mod mock;
pub mod section;
pub mod session;
pub mod settings;
pub mod timefmt;
pub mod vault;

pub use bridge::{CMD_ADD_LOG, CMD_TOGGLE_CAPTURE, DailyLogBridge, EventHandlers, HandlerResult, UNIT_NAME};
pub use error::LogError;
pub use session::SessionState;
pub use settings::{Settings, SettingsStore};
pub use vault::{DailyNoteSettings, FsVault, NoteHandle, Vault};
