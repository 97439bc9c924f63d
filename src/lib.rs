//! user-status - set and show GitHub statuses from the terminal.
//!
//! The heart of the crate is the emoji engine: an embedded catalog of emoji,
//! an alias index over it, and [`EmojiManager::replace_all`], which turns
//! `:alias:` shortcodes into glyphs. Talking to GitHub is left to the `gh` CLI.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod expansion;
pub mod gh;
pub mod index;
pub mod interactive;
pub mod manager;
pub mod status;

// Re-export
pub use catalog::{Emoji, EmojiCatalog};
pub use cli::{Commands, UserStatus};
pub use commands::handle_command;
pub use config::{DEFAULT_EMOJI, SPECIAL_CHAR};
pub use error::{Result, StatusError};
pub use gh::Gh;
pub use index::AliasIndex;
pub use manager::EmojiManager;
pub use status::{get_status, set_status, SetOptions, Status};
