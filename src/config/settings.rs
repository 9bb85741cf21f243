//! Application settings and Telegram configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Longest accepted long-polling timeout in seconds.
///
/// The Bot API client drops any request that takes longer than 17 s, so an
/// idle `getUpdates` must return before that.
pub const MAX_POLL_TIMEOUT_SECS: u32 = 15;

/// Telegram Bot API configuration.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token issued by @BotFather.
    pub bot_token: String,
}

impl TelegramConfig {
    /// Creates a new Telegram configuration.
    #[must_use]
    pub fn new(bot_token: String) -> Self {
        Self { bot_token }
    }

    /// Creates configuration from environment variables.
    ///
    /// Expects `BOT_TOKEN` to be set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = lookup("BOT_TOKEN")
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingEnvVar("BOT_TOKEN"))?;

        Ok(Self { bot_token })
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .finish()
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// File that receives a copy of the log stream.
    pub log_file: PathBuf,

    /// Long-polling timeout for `getUpdates` in seconds, `1..=MAX_POLL_TIMEOUT_SECS`.
    pub poll_timeout_secs: u32,

    /// Log level for the application.
    pub log_level: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("bot.log")
}

fn default_poll_timeout() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            poll_timeout_secs: default_poll_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `POLL_TIMEOUT` is set but is not a number of
    /// seconds between 1 and [`MAX_POLL_TIMEOUT_SECS`].
    pub fn from_env_with_defaults() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let poll_timeout_secs = match lookup("POLL_TIMEOUT") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|secs| (1..=MAX_POLL_TIMEOUT_SECS).contains(secs))
                .ok_or(ConfigError::InvalidPollTimeout)?,
            None => default_poll_timeout(),
        };

        Ok(Self {
            log_file: lookup("LOG_FILE").map_or_else(default_log_file, PathBuf::from),
            poll_timeout_secs,
            log_level: lookup("RUST_LOG").unwrap_or_else(default_log_level),
        })
    }

    /// Long-polling timeout as a [`Duration`].
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.poll_timeout_secs))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid POLL_TIMEOUT (must be 1 to {} seconds)", MAX_POLL_TIMEOUT_SECS)]
    InvalidPollTimeout,
}

/// Masks a bot token for logging (keeps the bot id, hides the secret).
fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, _secret)) if !bot_id.is_empty() => format!("{bot_id}:***"),
        _ => "***".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.log_file, PathBuf::from("bot.log"));
        assert_eq!(settings.poll_timeout_secs, 5);
        assert_eq!(settings.poll_timeout(), Duration::from_secs(5));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_settings_from_env() {
        let settings = BotSettings::from_lookup(lookup_from(&[
            ("LOG_FILE", "/var/log/mobot.log"),
            ("POLL_TIMEOUT", " 10 "),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.log_file, PathBuf::from("/var/log/mobot.log"));
        assert_eq!(settings.poll_timeout_secs, 10);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_settings_missing_env_uses_defaults() {
        let settings = BotSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.log_file, PathBuf::from("bot.log"));
        assert_eq!(settings.poll_timeout_secs, 5);
    }

    #[test]
    fn test_settings_invalid_poll_timeout() {
        let result = BotSettings::from_lookup(lookup_from(&[("POLL_TIMEOUT", "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidPollTimeout)));
    }

    #[test]
    fn test_settings_poll_timeout_bounds() {
        let accepted = |raw: &str| {
            BotSettings::from_lookup(lookup_from(&[("POLL_TIMEOUT", raw)]))
                .map(|s| s.poll_timeout_secs)
                .ok()
        };

        assert_eq!(accepted("1"), Some(1));
        assert_eq!(accepted("15"), Some(MAX_POLL_TIMEOUT_SECS));
        assert_eq!(accepted("0"), None);
        assert_eq!(accepted("16"), None);
        assert_eq!(accepted("30"), None);
        assert_eq!(accepted("-5"), None);
    }

    #[test]
    fn test_telegram_config_from_env() {
        let config =
            TelegramConfig::from_lookup(lookup_from(&[("BOT_TOKEN", "123456:ABC-DEF")])).unwrap();
        assert_eq!(config.bot_token, "123456:ABC-DEF");
    }

    #[test]
    fn test_telegram_config_missing_token() {
        let result = TelegramConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar("BOT_TOKEN"))));
    }

    #[test]
    fn test_telegram_config_empty_token() {
        let result = TelegramConfig::from_lookup(lookup_from(&[("BOT_TOKEN", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar("BOT_TOKEN"))));
    }

    #[test]
    fn test_debug_masks_token() {
        let config = TelegramConfig::new("123456:super-secret".to_owned());
        let debug = format!("{config:?}");
        assert!(debug.contains("123456:***"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("42:abc"), "42:***");
        assert_eq!(mask_token("no-colon"), "***");
        assert_eq!(mask_token(":abc"), "***");
    }
}
