use std::fmt::Write;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use chrono_tz::Tz::America__Toronto;

pub const TIMEZONE: Tz = America__Toronto;
pub const DEFAULT_PATTERN: &str = "%-I:%M:%S %p";

/// How log entries stamp the instant an event was recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct TimestampFormat {
    timezone: Tz,
    pattern: String,
}

impl TimestampFormat {
    pub fn new(timezone: Tz, pattern: impl Into<String>) -> Self {
        Self {
            timezone,
            pattern: pattern.into(),
        }
    }

    /// Falls back to RFC 3339 if the pattern has an item chrono can't render.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        let mut out = String::new();
        match write!(out, "{}", instant.with_timezone(&self.timezone).format(&self.pattern)) {
            Ok(()) => out,
            Err(_) => instant.with_timezone(&self.timezone).to_rfc3339(),
        }
    }
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self::new(TIMEZONE, DEFAULT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_the_configured_zone() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 19, 5, 9).unwrap();
        assert_eq!(TimestampFormat::default().format(instant), "2:05:09 PM");
        assert_eq!(TimestampFormat::new(Tz::UTC, "%H:%M:%S").format(instant), "19:05:09");
    }

    #[test]
    fn unrenderable_pattern_does_not_panic() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 19, 5, 9).unwrap();
        assert!(!is_valid_pattern("%Q"));
        assert!(is_valid_pattern(DEFAULT_PATTERN));
        assert_eq!(TimestampFormat::new(Tz::UTC, "%Q").format(instant), "2024-01-15T19:05:09+00:00");
    }
}
