//! Configuration management for the contact book assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment yields a usable configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted upcoming-birthday horizon, in days.
pub const MAX_BIRTHDAY_HORIZON_DAYS: u32 = 366;

/// Configuration for the contact book assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_horizon_days: u32,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_HORIZON_DAYS`: Upcoming-birthday window, 0-366 (default: 7)
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", defaults.birthday_horizon_days)?;
        if birthday_horizon_days > MAX_BIRTHDAY_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_HORIZON_DAYS),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            birthday_horizon_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_horizon_days: 7,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
