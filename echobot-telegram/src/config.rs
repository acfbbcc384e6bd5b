//! Configuration loader: bot token, optional Bot API URL, optional log file path.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use echobot_core::ConfigError;
use std::env;

/// Telegram bot config. Built once at startup and not changed afterwards.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    /// Raw LOG_FILE; resolved by [`echobot_core::init_tracing`].
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env with no token override.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads from env. `token` overrides BOT_TOKEN; a missing or blank token is
    /// [`ConfigError::MissingToken`].
    pub fn load(token: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file: Self::log_file_from_env(),
        })
    }

    /// LOG_FILE, if set and not blank. Usable before the token is known.
    pub fn log_file_from_env() -> Option<String> {
        env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty())
    }

    /// Builds config with the given token; other fields default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Fails when telegram_api_url is set but not a valid URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_url().map(|_| ())
    }

    /// Parsed telegram_api_url, if set.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>, ConfigError> {
        self.telegram_api_url
            .as_deref()
            .map(|raw| {
                reqwest::Url::parse(raw).map_err(|_| ConfigError::InvalidApiUrl(raw.to_string()))
            })
            .transpose()
    }
}
