//! Formatting of captured instants.
//!
//! The core only ever sees pre-formatted strings. The CLI captures the instant with
//! [`now`] at each create/update event and hands the result down.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

pub const DEFAULT_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

pub fn format<Tz>(instant: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(pattern).to_string()
}

/// Captures the current local time and formats it with `pattern`.
pub fn now(pattern: &str) -> String {
    format(&Local::now(), pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_with_default_pattern() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap();
        assert_eq!(format(&instant, DEFAULT_FORMAT), "18.10.2026 09:05:07");
    }

    #[test]
    fn formats_with_custom_pattern() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&instant, "%Y-%m-%d %H:%M"), "2026-01-02 03:04");
    }

    #[test]
    fn now_is_never_empty() {
        assert!(!now(DEFAULT_FORMAT).is_empty());
    }
}
