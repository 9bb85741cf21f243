//! Command types and definitions.

use std::fmt;

/// Available slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    /// Greet the user and show the main menu keyboard.
    Start,

    /// List the available commands.
    Help,

    /// Describe what the bot is for.
    About,

    /// List the moderation features the bot advertises.
    Capabilities,

    /// Frequently asked questions.
    Faq,

    /// Availability check.
    Ping,
}

impl BotCommand {
    /// All commands in the order they are listed in help.
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::Help,
        Self::About,
        Self::Capabilities,
        Self::Faq,
        Self::Ping,
    ];

    /// Parses a slash command from a message text.
    ///
    /// Only the first whitespace-delimited token is considered. A
    /// `@botname` suffix is stripped and anything after the token is
    /// ignored, so `/help@mobot` and `/help please` both parse as
    /// [`BotCommand::Help`]. Names are case-sensitive.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if !text.starts_with('/') {
            return None;
        }

        let token = text.split_whitespace().next()?;
        let name = token.strip_prefix('/')?;
        let name = name.split_once('@').map_or(name, |(cmd, _bot)| cmd);

        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Returns the command name without the leading slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::About => "about",
            Self::Capabilities => "capabilities",
            Self::Faq => "faq",
            Self::Ping => "ping",
        }
    }

    /// Returns the command description shown in help and in the client's command menu.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Start => "Приветствие",
            Self::Help => "Справка по командам",
            Self::About => "Информация о боте",
            Self::Capabilities => "Возможности бота",
            Self::Faq => "Часто задаваемые вопросы",
            Self::Ping => "Проверка доступности бота",
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// Labels of the main menu reply keyboard.
///
/// Pressing a button sends its label as a plain message, which is routed
/// to the mapped command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    About,
    Help,
    Capabilities,
    Faq,
}

impl MenuButton {
    /// All buttons in keyboard order (left to right, top to bottom).
    pub const ALL: [Self; 4] = [Self::About, Self::Help, Self::Capabilities, Self::Faq];

    /// Text shown on the button and sent back when it is pressed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "📌 О боте",
            Self::Help => "🆘 Помощь",
            Self::Capabilities => "📈 Что умею",
            Self::Faq => "💬 FAQ",
        }
    }

    /// Command whose reply the button produces.
    #[must_use]
    pub const fn command(self) -> BotCommand {
        match self {
            Self::About => BotCommand::About,
            Self::Help => BotCommand::Help,
            Self::Capabilities => BotCommand::Capabilities,
            Self::Faq => BotCommand::Faq,
        }
    }

    /// Finds the button with exactly this label.
    #[must_use]
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.label() == text)
    }
}

/// Reply keyboard layout suggested to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyKeyboard {
    /// Button labels, row by row.
    pub rows: Vec<Vec<String>>,

    /// Ask the client to shrink the keyboard to fit its buttons.
    pub resize: bool,
}

impl ReplyKeyboard {
    /// The 2x2 main menu shown after `/start`.
    #[must_use]
    pub fn main_menu() -> Self {
        let rows = MenuButton::ALL
            .chunks(2)
            .map(|row| row.iter().map(|b| b.label().to_owned()).collect())
            .collect();

        Self { rows, resize: true }
    }
}

/// Outbound reply produced for one inbound message.
///
/// The text is always sent with HTML parse mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message text, HTML markup allowed.
    pub text: String,

    /// Keyboard to attach, if any.
    pub keyboard: Option<ReplyKeyboard>,
}

impl Reply {
    /// Creates an HTML-formatted reply without a keyboard.
    #[must_use]
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Attaches a reply keyboard.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: ReplyKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_command() {
        for cmd in BotCommand::ALL {
            let text = format!("/{}", cmd.name());
            assert_eq!(BotCommand::parse(&text), Some(cmd));
        }
    }

    #[test]
    fn test_parse_with_bot_suffix() {
        assert_eq!(BotCommand::parse("/help@mobot"), Some(BotCommand::Help));
        assert_eq!(BotCommand::parse("/ping@other_bot"), Some(BotCommand::Ping));
    }

    #[test]
    fn test_parse_ignores_arguments() {
        assert_eq!(BotCommand::parse("/faq please"), Some(BotCommand::Faq));
        assert_eq!(BotCommand::parse("/start  \n deep-link"), Some(BotCommand::Start));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(BotCommand::parse("/HELP"), None);
        assert_eq!(BotCommand::parse("/Start"), None);
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert_eq!(BotCommand::parse("help"), None);
        assert_eq!(BotCommand::parse(" /help"), None);
        assert_eq!(BotCommand::parse("/"), None);
        assert_eq!(BotCommand::parse("/ help"), None);
        assert_eq!(BotCommand::parse("/helpme"), None);
        assert_eq!(BotCommand::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BotCommand::Capabilities.to_string(), "/capabilities");
    }

    #[test]
    fn test_menu_button_labels_round_trip() {
        for button in MenuButton::ALL {
            assert_eq!(MenuButton::from_label(button.label()), Some(button));
        }
        assert_eq!(MenuButton::from_label("📌 о боте"), None);
        assert_eq!(MenuButton::from_label(" 💬 FAQ"), None);
    }

    #[test]
    fn test_main_menu_layout() {
        let kb = ReplyKeyboard::main_menu();
        assert!(kb.resize);
        assert_eq!(
            kb.rows,
            vec![
                vec!["📌 О боте".to_owned(), "🆘 Помощь".to_owned()],
                vec!["📈 Что умею".to_owned(), "💬 FAQ".to_owned()],
            ]
        );
    }

    #[test]
    fn test_reply_html_defaults() {
        let reply = Reply::html("Pong!");
        assert_eq!(reply.text, "Pong!");
        assert!(reply.keyboard.is_none());
    }
}
