//! Long-polling runner.
//!
//! The runner is a plain loop over one transport:
//! 1. Poll for updates after the current offset
//! 2. For each update, advance the offset
//! 3. Route the message text, if any, and send the reply
//!
//! Messages are handled strictly one at a time. Any transport error stops
//! the loop and is returned to the caller; nothing is retried.

use std::time::Duration;

use tracing::{debug, info};

use super::client::{InboundMessage, TelegramError, Transport};
use crate::commands::Router;

/// Drives the poll → route → reply loop.
#[derive(Debug)]
pub struct BotRunner<T> {
    /// Where updates come from and replies go.
    transport: T,

    /// Dispatch table for inbound text.
    router: Router,

    /// Long-polling timeout passed to every poll.
    poll_timeout: Duration,

    /// Offset of the next update to fetch.
    offset: i32,
}

impl<T: Transport> BotRunner<T> {
    /// Creates a runner starting from the oldest pending update.
    #[must_use]
    pub fn new(transport: T, router: Router, poll_timeout: Duration) -> Self {
        Self {
            transport,
            router,
            poll_timeout,
            offset: 0,
        }
    }

    /// Runs until the transport fails.
    ///
    /// # Errors
    ///
    /// Returns the first poll or send error.
    pub async fn run(&mut self) -> Result<(), TelegramError> {
        info!("Polling for updates (timeout: {:?})", self.poll_timeout);

        loop {
            self.poll_once().await?;
        }
    }

    /// Performs a single poll and handles every update it returns.
    ///
    /// Returns the number of replies sent.
    ///
    /// # Errors
    ///
    /// Returns the poll error, or the first send error.
    pub async fn poll_once(&mut self) -> Result<usize, TelegramError> {
        let updates = self.transport.poll(self.offset, self.poll_timeout).await?;

        let mut sent = 0;
        for update in updates {
            self.offset = self.offset.max(update.next_offset);

            if let Some(message) = &update.message
                && self.process(message).await?
            {
                sent += 1;
            }
        }

        Ok(sent)
    }

    /// Routes one message and sends the reply, if any.
    ///
    /// Returns whether a reply was sent.
    ///
    /// # Errors
    ///
    /// Returns an error if sending the reply fails.
    pub async fn process(&self, message: &InboundMessage) -> Result<bool, TelegramError> {
        let Some(text) = message.text.as_deref() else {
            debug!("Ignoring non-text message in chat {}", message.chat_id);
            return Ok(false);
        };

        let Some(reply) = self.router.route(text) else {
            debug!(
                "No route for message {} in chat {}",
                message.message_id, message.chat_id
            );
            return Ok(false);
        };

        self.transport.send(message, &reply).await?;
        info!(
            "Replied to message {} in chat {}",
            message.message_id, message.chat_id
        );
        Ok(true)
    }

    /// Offset that the next poll will request.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }
}
