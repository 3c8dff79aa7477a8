use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAILY_WORK_HOURS: f64 = 8.0;
pub const DEFAULT_LUNCH_BREAK_HOURS: f64 = 1.0;

/// Expected daily hours and the lunch fallback used when no lunch punches exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkTimeConfig {
    pub daily_work_hours: f64,
    pub lunch_break_hours: f64,
}

impl Default for WorkTimeConfig {
    fn default() -> Self {
        Self {
            daily_work_hours: DEFAULT_DAILY_WORK_HOURS,
            lunch_break_hours: DEFAULT_LUNCH_BREAK_HOURS,
        }
    }
}

impl WorkTimeConfig {
    pub fn new(daily_work_hours: f64, lunch_break_hours: f64) -> AppResult<Self> {
        for (name, value) in [
            ("daily_work_hours", daily_work_hours),
            ("lunch_break_hours", lunch_break_hours),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::Config(format!(
                    "{name} must be a positive number of hours, got {value}"
                )));
            }
        }

        Ok(Self {
            daily_work_hours,
            lunch_break_hours,
        })
    }
}

/// Worked-hours breakdown for one day. Every value is in decimal hours,
/// rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkTimeResult {
    pub total_hours: f64,
    pub worked_hours: f64,
    pub lunch_hours: f64,
    pub overtime_hours: f64,
    pub deficit_hours: f64,
    pub is_complete: bool,
}

impl WorkTimeResult {
    /// Signed balance of the day: overtime is positive, deficit negative.
    pub fn balance(&self) -> f64 {
        self.overtime_hours - self.deficit_hours
    }
}
