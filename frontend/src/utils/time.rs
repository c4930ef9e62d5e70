use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::config;

/// Current wall-clock date. Uses the configured venue time zone when present,
/// the browser clock otherwise.
pub fn today() -> NaiveDate {
    today_at(Utc::now())
}

pub fn today_at(now: DateTime<Utc>) -> NaiveDate {
    match config::current_time_zone() {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.with_timezone(&Local).date_naive(),
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Renders API timestamps (`2025-06-01T10:00:00Z`, `2025-06-01 10:00:00`)
/// as `dd/mm/yyyy HH:MM`; anything else is shown as received.
pub fn display_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, pattern) {
            return parsed.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    raw.to_string()
}
