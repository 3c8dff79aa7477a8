use super::day_status::DayStatus;
use super::work_time::WorkTimeResult;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub result: WorkTimeResult,
}
