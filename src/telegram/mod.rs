//! Telegram transport module.
//!
//! Wraps the Bot API client and runs the long-polling loop that feeds
//! inbound messages to the router.

mod client;
mod runner;

pub use client::{InboundMessage, PolledUpdate, TelegramBot, TelegramError, Transport};
pub use runner::BotRunner;
