//! Timestamp formatting.
//!
//! The store keeps timestamps as plain text; producing that text is the caller's job.
//! Formats are chrono strftime strings.

use crate::error::{NotelogError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Checks that chrono can parse `fmt`.
pub fn validate_format(fmt: &str) -> std::result::Result<(), String> {
    if fmt.is_empty() {
        return Err("Timestamp format cannot be empty".to_string());
    }
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(format!("Invalid timestamp format: {}", fmt));
    }
    Ok(())
}

/// Formats `at` with `fmt`. Invalid formats are reported, not panicked on.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, fmt: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    validate_format(fmt).map_err(NotelogError::Config)?;
    let mut out = String::new();
    write!(out, "{}", at.format(fmt))
        .map_err(|_| NotelogError::Config(format!("Cannot format timestamp with {}", fmt)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn formats_with_default() {
        let out = format_timestamp(&new_year(), DEFAULT_TIMESTAMP_FORMAT).unwrap();
        assert_eq!(out, "2024-01-01 10:00:00");
    }

    #[test]
    fn formats_with_custom_format() {
        let out = format_timestamp(&new_year(), "%d/%m/%Y %H:%M").unwrap();
        assert_eq!(out, "01/01/2024 10:00");
    }

    #[test]
    fn rejects_invalid_specifier() {
        assert!(validate_format("%Y-%Q").is_err());
        assert!(matches!(
            format_timestamp(&new_year(), "%Y-%Q"),
            Err(NotelogError::Config(_))
        ));
    }

    #[test]
    fn rejects_empty_format() {
        assert!(validate_format("").is_err());
    }

    #[test]
    fn accepts_literal_text() {
        assert!(validate_format("logged at %H:%M").is_ok());
    }
}
