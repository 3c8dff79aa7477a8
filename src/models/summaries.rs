//! Derived value objects returned by the estimator and the aggregators.

use serde::Serialize;

/// Live countdown for an in-progress day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub hours_remaining: i64,
    pub minutes_remaining: i64,
    pub is_complete: bool,
}

impl TimeRemaining {
    pub fn total_minutes(&self) -> i64 {
        self.hours_remaining * 60 + self.minutes_remaining
    }
}

/// Signed bank of hours: positive is credit owed to the worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BankHoursSummary {
    pub total: f64,
    pub positive: f64,
    pub negative: f64,
    pub average_daily: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodStats {
    pub total_worked_hours: f64,
    pub total_overtime_hours: f64,
    pub total_deficit_hours: f64,
    pub average_daily_hours: f64,
    pub total_days: usize,
    pub complete_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: String, // "YYYY-MM"
    pub stats: PeriodStats,
}
