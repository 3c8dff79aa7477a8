//! Time utilities: strict HH:MM parsing, clamped spans between times of day, rounding.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid HH:MM regex"));

/// Parse a 24-hour `HH:MM` string. Single-digit hours and seconds are rejected.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    if !HHMM.is_match(t) {
        return Err(AppError::Parse(t.to_string()));
    }
    NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| AppError::Parse(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_time(s)).transpose()
}

/// Minutes from `start` to `end` on the same day; an inverted span counts as 0.
pub fn span_minutes(start: NaiveTime, end: NaiveTime) -> f64 {
    let secs = (end - start).num_seconds();
    (secs.max(0) as f64) / 60.0
}

/// Hours from `start` to `end` on the same day; an inverted span counts as 0.
pub fn span_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    span_minutes(start, end) / 60.0
}

/// Round half-up to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Current local time of day, truncated to the minute.
pub fn now_hhmm() -> NaiveTime {
    let now = chrono::Local::now().time();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
