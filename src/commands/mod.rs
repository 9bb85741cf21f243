//! Command handling module.
//!
//! Maps inbound message text to templated replies: menu buttons, slash
//! commands (`/start`, `/help`, ...) and the `анализ`/`разбор` keyword.

mod handler;
mod router;
mod templates;
mod types;

pub use handler::{ANALYSIS_KEYWORDS, Handler};
pub use router::{Pattern, Route, Router};
pub use templates::{ANALYSIS_PROMPT, DISCLAIMER};
pub use types::{BotCommand, MenuButton, Reply, ReplyKeyboard};
