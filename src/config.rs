use core::str::FromStr;
use chrono_tz::Tz;
use thiserror::Error;
use crate::util::time::{is_valid_pattern, TimestampFormat, DEFAULT_PATTERN, TIMEZONE};

pub const DEFAULT_PLAYERS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRACKER_TZ '{0}' is not a known time zone")]
    Timezone(String),
    #[error("TRACKER_TIME_FORMAT '{0}' is not a valid strftime pattern")]
    TimeFormat(String),
    #[error("TRACKER_PLAYERS '{0}' is not a player count")]
    Players(String),
    #[error("TRACKER_CLIPBOARD '{0}' is not true or false")]
    Clipboard(String),
}

/// Session settings, read from `TRACKER_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub timezone: Tz,
    pub time_format: String,
    pub starting_players: usize,
    pub copy_to_clipboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: TIMEZONE,
            time_format: DEFAULT_PATTERN.to_owned(),
            starting_players: DEFAULT_PLAYERS,
            copy_to_clipboard: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(timezone) = lookup("TRACKER_TZ") {
            config.timezone = Tz::from_str(timezone.trim()).map_err(|_| ConfigError::Timezone(timezone))?;
        }
        if let Some(time_format) = lookup("TRACKER_TIME_FORMAT").filter(|format| !format.trim().is_empty()) {
            if !is_valid_pattern(&time_format) {
                return Err(ConfigError::TimeFormat(time_format));
            }
            config.time_format = time_format;
        }
        if let Some(players) = lookup("TRACKER_PLAYERS") {
            config.starting_players = players.trim().parse().map_err(|_| ConfigError::Players(players))?;
        }
        if let Some(clipboard) = lookup("TRACKER_CLIPBOARD") {
            config.copy_to_clipboard = match clipboard.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::Clipboard(clipboard)),
            };
        }
        Ok(config)
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        TimestampFormat::new(self.timezone, self.time_format.clone())
    }
}
