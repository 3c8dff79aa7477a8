// src/export/model.rs

use crate::models::day_record::DayRecord;
use crate::models::day_summary::DaySummary;
use crate::models::punch_type::PunchType;
use crate::models::summaries::{BankHoursSummary, PeriodStats};
use serde::Serialize;

/// Flat per-day row: punch times plus the computed day result.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub status: String,
    pub entry: Option<String>,
    pub lunch_out: Option<String>,
    pub lunch_return: Option<String>,
    pub exit: Option<String>,
    pub total_hours: f64,
    pub lunch_hours: f64,
    pub worked_hours: f64,
    pub overtime_hours: f64,
    pub deficit_hours: f64,
    pub is_complete: bool,
}

impl DayExport {
    pub fn from_summary(record: &DayRecord, summary: &DaySummary) -> Self {
        let schedule = record.schedule();
        let time = |k: PunchType| schedule.get(k).map(|p| p.time_str());

        Self {
            date: record.date_str(),
            status: summary.status.state.as_str().to_string(),
            entry: time(PunchType::Entry),
            lunch_out: time(PunchType::LunchOut),
            lunch_return: time(PunchType::LunchReturn),
            exit: time(PunchType::Exit),
            total_hours: summary.result.total_hours,
            lunch_hours: summary.result.lunch_hours,
            worked_hours: summary.result.worked_hours,
            overtime_hours: summary.result.overtime_hours,
            deficit_hours: summary.result.deficit_hours,
            is_complete: summary.result.is_complete,
        }
    }
}

/// Raw punch row (`export --punches`).
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub owner_id: String,
    pub date: String,
    pub kind: String,
    pub time: String,
    pub label: String,
    pub captured_at: String,
}

impl PunchExport {
    pub fn rows_of(record: &DayRecord) -> Vec<Self> {
        record
            .schedule()
            .punches()
            .map(|p| Self {
                owner_id: record.owner_id.clone(),
                date: record.date_str(),
                kind: p.kind.to_db_str().to_string(),
                time: p.time_str(),
                label: p.label.clone(),
                captured_at: p.captured_at.to_rfc3339(),
            })
            .collect()
    }
}

/// JSON report: the day rows plus the aggregates of the same range.
#[derive(Serialize, Clone, Debug)]
pub struct Report {
    pub owner_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub days: Vec<DayExport>,
    pub bank: BankHoursSummary,
    pub stats: PeriodStats,
}
