//! Environment-based configuration.
//!
//! Everything is read once at startup; a half-configured process never
//! gets past `Config::from_env`. The secret values are held in memory
//! and must never appear in log output.

use chrono_tz::Tz;

/// Timezone anchoring "today" and "tomorrow" when `BOT_TIMEZONE` is
/// not set.
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Moscow;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingVar(&'static str),
    #[error("BOT_TIMEZONE is not a valid timezone name: {0}")]
    InvalidTimezone(String),
}

/// Runtime configuration for one process.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub timezone: Tz,
}

impl Config {
    /// Read configuration from the environment. `.env` loading (if any)
    /// must already have happened.
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token = required_var("TELEGRAM_BOT_TOKEN")?;
        let gemini_api_key = required_var("GEMINI_API_KEY")?;

        let gemini_model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| crate::gemini::DEFAULT_MODEL.to_string());

        let timezone = match std::env::var("BOT_TIMEZONE") {
            Ok(name) if !name.trim().is_empty() => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone(name))?,
            _ => DEFAULT_TIMEZONE,
        };

        Ok(Self {
            telegram_token,
            gemini_api_key,
            gemini_model,
            timezone,
        })
    }
}

/// An unset variable and an empty one are the same failure.
fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
