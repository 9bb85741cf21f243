//! Dispatch table mapping inbound text to reply handlers.

use tracing::debug;

use super::handler::{self, Handler};
use super::types::{BotCommand, MenuButton, Reply};

/// What an inbound text has to look like for a route to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The whole text equals this menu button label.
    Button(MenuButton),

    /// The first token is this slash command.
    Command(BotCommand),

    /// The trimmed text starts with an analysis keyword, ignoring case.
    AnalysisKeyword,
}

impl Pattern {
    /// Checks whether the text matches this pattern.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Button(button) => text == button.label(),
            Self::Command(command) => BotCommand::parse(text) == Some(command),
            Self::AnalysisKeyword => handler::is_analysis_request(text),
        }
    }
}

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: Pattern,
    pub handler: Handler,
}

impl Route {
    #[must_use]
    pub const fn new(pattern: Pattern, handler: Handler) -> Self {
        Self { pattern, handler }
    }
}

/// Routes inbound text to at most one reply.
///
/// Routes are tried in order and the first matching one wins.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates a router over an explicit dispatch table.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The bot's dispatch table: menu buttons, then slash commands, then
    /// the analysis keyword.
    #[must_use]
    pub fn standard() -> Self {
        let buttons = MenuButton::ALL
            .into_iter()
            .map(|button| Route::new(Pattern::Button(button), handler::for_command(button.command())));

        let commands = BotCommand::ALL
            .into_iter()
            .map(|command| Route::new(Pattern::Command(command), handler::for_command(command)));

        let keyword = Route::new(Pattern::AnalysisKeyword, handler::handle_analysis);

        Self::new(buttons.chain(commands).chain(std::iter::once(keyword)).collect())
    }

    /// Returns the reply for `text`, or `None` when no route matches.
    pub fn route(&self, text: &str) -> Option<Reply> {
        let route = self.routes.iter().find(|route| route.pattern.matches(text))?;

        debug!("Matched route: {:?}", route.pattern);
        Some((route.handler)(text))
    }

    /// Number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::standard()
    }
}
