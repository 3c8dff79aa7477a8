//! Date helpers: parsing of single dates and of `--period` / `--range` expressions.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `None` or `"today"` → today, otherwise a `YYYY-MM-DD` date.
pub fn resolve_day(input: Option<&str>) -> AppResult<NaiveDate> {
    match input {
        None => Ok(today()),
        Some(s) if s.eq_ignore_ascii_case("today") => Ok(today()),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn month_of(d: NaiveDate) -> Self {
        // month_bounds only fails on out-of-range years
        let (from, to) = month_bounds(d.year(), d.month()).unwrap_or((d, d));
        Self { from, to }
    }
}

/// Resolve a period expression.
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `A:B` ranges of those
/// (formats may be mixed). `None` selects the month of `today`; `"all"`
/// returns `Ok(None)`, meaning no bound.
pub fn resolve_period(period: Option<&str>, today: NaiveDate) -> AppResult<Option<DateRange>> {
    let p = match period {
        None => return Ok(Some(DateRange::month_of(today))),
        Some(p) if p.trim().eq_ignore_ascii_case("all") => return Ok(None),
        Some(p) => p.trim(),
    };

    let (from, to) = match p.split_once(':') {
        Some((start, end)) => (parse_bounds(start)?.0, parse_bounds(end)?.1),
        None => parse_bounds(p)?,
    };

    if from > to {
        return Err(AppError::InvalidDate(format!(
            "period start {} is after its end {}",
            from, to
        )));
    }

    Ok(Some(DateRange { from, to }))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn parse_bounds(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let s = s.trim();
    let invalid = || AppError::InvalidDate(s.to_string());

    match s.len() {
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let (y, m) = s.split_once('-').ok_or_else(invalid)?;
            let y: i32 = y.parse().map_err(|_| invalid())?;
            let m: u32 = m.parse().map_err(|_| invalid())?;
            month_bounds(y, m).ok_or_else(invalid)
        }
        10 => {
            let d = parse_date(s).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}
