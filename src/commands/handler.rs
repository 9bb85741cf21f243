//! Reply handlers.
//!
//! Every handler receives the inbound text and builds one [`Reply`]. None of
//! them touch any state, so they can be called in any order.

use super::templates;
use super::types::{BotCommand, Reply, ReplyKeyboard};

/// Keywords that request a mini-analysis, matched case-insensitively as a prefix.
pub const ANALYSIS_KEYWORDS: [&str; 2] = ["анализ", "разбор"];

/// Signature shared by all entries of the dispatch table.
pub type Handler = fn(&str) -> Reply;

/// Returns the handler for a slash command.
#[must_use]
pub const fn for_command(command: BotCommand) -> Handler {
    match command {
        BotCommand::Start => handle_start,
        BotCommand::Help => handle_help,
        BotCommand::About => handle_about,
        BotCommand::Capabilities => handle_capabilities,
        BotCommand::Faq => handle_faq,
        BotCommand::Ping => handle_ping,
    }
}

/// `/start`: greeting plus the main menu keyboard.
pub fn handle_start(_text: &str) -> Reply {
    Reply::html(templates::GREETING).with_keyboard(ReplyKeyboard::main_menu())
}

/// `/help`: the command list.
pub fn handle_help(_text: &str) -> Reply {
    Reply::html(templates::help())
}

/// `/about`: what the bot is for.
pub fn handle_about(_text: &str) -> Reply {
    Reply::html(templates::ABOUT)
}

/// `/capabilities`: the advertised moderation features.
pub fn handle_capabilities(_text: &str) -> Reply {
    Reply::html(templates::CAPABILITIES)
}

/// `/faq`: frequently asked questions.
pub fn handle_faq(_text: &str) -> Reply {
    Reply::html(templates::FAQ)
}

/// `/ping`: availability check.
pub fn handle_ping(_text: &str) -> Reply {
    Reply::html(templates::PONG)
}

/// Handles `анализ <num>` / `разбор <num>`.
///
/// The second whitespace-delimited token is the message number; without it
/// the user is asked to provide one.
pub fn handle_analysis(text: &str) -> Reply {
    match text.split_whitespace().nth(1) {
        Some(num) => Reply::html(templates::mini_analysis(num)),
        None => Reply::html(templates::ANALYSIS_PROMPT),
    }
}

/// Checks whether the trimmed text starts with one of [`ANALYSIS_KEYWORDS`], ignoring case.
#[must_use]
pub fn is_analysis_request(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    ANALYSIS_KEYWORDS
        .iter()
        .any(|keyword| lowered.starts_with(keyword))
}
