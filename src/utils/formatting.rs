//! Formatting utilities shared by the CLI tables and the exports.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Decimal hours → whole minutes, rounding the minute part to the nearest integer.
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

/// `8.5` → `"08:30"`. Negative values keep a leading `-`.
pub fn format_hours(hours: f64) -> String {
    let mins = hours_to_minutes(hours.abs());
    let body = mins2readable(mins, false, true);
    if hours < 0.0 && mins != 0 {
        format!("-{body}")
    } else {
        body
    }
}

/// `-0.5` → `"-00:30"`, `1.25` → `"+01:15"`, `0` → `"+00:00"`.
/// The sign follows the value, so `-0.001` gives `"-00:00"`.
pub fn format_bank_hours(hours: f64) -> String {
    let mins = hours_to_minutes(hours.abs());
    let sign = if hours < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, mins2readable(mins, false, true))
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25 oppure -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m oppure -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
