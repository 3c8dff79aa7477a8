use crate::core::calculator::{calculate_work_time, derive_status};
use crate::models::day_record::DayRecord;
use crate::models::day_summary::DaySummary;
use crate::models::work_time::WorkTimeConfig;

pub struct Core;

impl Core {
    /// Status and worked hours of one day, derived from a single schedule lookup.
    pub fn build_daily_summary(
        record: &DayRecord,
        cfg: &WorkTimeConfig,
        require_lunch: bool,
    ) -> DaySummary {
        let schedule = record.schedule();

        DaySummary {
            date: record.date,
            status: derive_status(&schedule, require_lunch),
            result: calculate_work_time(&schedule, cfg),
        }
    }
}
