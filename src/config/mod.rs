//! Configuration module for the bot.
//!
//! Loads the bot token and runtime settings from the environment.

mod settings;

pub use settings::{BotSettings, ConfigError, MAX_POLL_TIMEOUT_SECS, TelegramConfig};
