//! Telegram Bot API client wrapper.

use std::future::Future;
use std::time::Duration;

use teloxide::payloads::{GetUpdatesSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{
    AllowedUpdate, BotCommand as MenuCommand, KeyboardButton, KeyboardMarkup, MessageId,
    ParseMode, ReplyParameters, Update, UpdateKind,
};
use teloxide::RequestError;
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::{BotCommand, Reply, ReplyKeyboard};
use crate::config::TelegramConfig;

/// Errors that can occur during Telegram operations.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram API request failed: {0}")]
    Request(#[from] RequestError),
}

/// A text update as seen by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Chat the message was posted in; replies go back here.
    pub chat_id: i64,

    /// Id of the message within the chat, used to reply to it.
    pub message_id: i32,

    /// Message text, `None` for stickers, photos and other non-text content.
    pub text: Option<String>,
}

/// One update returned by a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolledUpdate {
    /// Offset to request next so this update is not delivered again.
    pub next_offset: i32,

    /// The message carried by the update, if it is a message update.
    pub message: Option<InboundMessage>,
}

/// Source of inbound messages and sink for replies.
pub trait Transport {
    /// Long-polls for updates starting at `offset`.
    fn poll(
        &self,
        offset: i32,
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<PolledUpdate>, TelegramError>> + Send;

    /// Sends `reply` as an answer to `message`.
    fn send(
        &self,
        message: &InboundMessage,
        reply: &Reply,
    ) -> impl Future<Output = Result<(), TelegramError>> + Send;
}

/// High-level Telegram client wrapper.
#[derive(Clone)]
pub struct TelegramBot {
    /// The underlying teloxide bot.
    bot: Bot,
}

impl TelegramBot {
    /// Creates a client for the configured bot token.
    ///
    /// No request is made until the client is used.
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(config.bot_token.clone()),
        }
    }

    /// Returns the bot's username, checking that the token is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the `getMe` request fails.
    pub async fn me(&self) -> Result<Option<String>, TelegramError> {
        let me = self.bot.get_me().await?;
        Ok(me.user.username)
    }

    /// Publishes the slash commands so clients show them in the command menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the `setMyCommands` request fails.
    pub async fn register_commands(&self) -> Result<(), TelegramError> {
        let commands = BotCommand::ALL
            .into_iter()
            .map(|cmd| MenuCommand::new(cmd.name(), cmd.description()));

        self.bot.set_my_commands(commands).await?;
        info!("Registered {} commands", BotCommand::ALL.len());
        Ok(())
    }
}

impl Transport for TelegramBot {
    async fn poll(&self, offset: i32, timeout: Duration) -> Result<Vec<PolledUpdate>, TelegramError> {
        let updates = self
            .bot
            .get_updates()
            .offset(offset)
            .timeout(u32::try_from(timeout.as_secs()).unwrap_or(u32::MAX))
            .allowed_updates(vec![AllowedUpdate::Message])
            .await?;

        if !updates.is_empty() {
            debug!("Received {} updates", updates.len());
        }

        Ok(updates.into_iter().map(polled_update).collect())
    }

    async fn send(&self, message: &InboundMessage, reply: &Reply) -> Result<(), TelegramError> {
        let mut request = self
            .bot
            .send_message(ChatId(message.chat_id), reply.text.clone())
            .reply_parameters(ReplyParameters::new(MessageId(message.message_id)))
            .parse_mode(ParseMode::Html);

        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(keyboard_markup(keyboard));
        }

        request.await?;
        Ok(())
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot").finish_non_exhaustive()
    }
}

/// Converts a Bot API update, keeping only what the runner needs.
///
/// Anything but a new message (edits, channel posts, ...) carries no message.
fn polled_update(update: Update) -> PolledUpdate {
    let next_offset = i32::try_from(update.id.0).map_or(i32::MAX, |id| id.saturating_add(1));

    let message = match update.kind {
        UpdateKind::Message(msg) => Some(InboundMessage {
            chat_id: msg.chat.id.0,
            message_id: msg.id.0,
            text: msg.text().map(str::to_owned),
        }),
        _ => None,
    };

    PolledUpdate {
        next_offset,
        message,
    }
}

/// Converts a keyboard layout to the Bot API markup.
fn keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let markup = KeyboardMarkup::new(
        keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>()),
    );

    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}
