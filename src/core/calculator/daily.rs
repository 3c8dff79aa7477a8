use crate::models::day_schedule::DaySchedule;
use crate::models::work_time::{WorkTimeConfig, WorkTimeResult};
use crate::utils::time::{round2, span_hours};

/// Worked hours for one day.
///
/// Days without both entry and exit get no partial credit. Explicit lunch
/// punches win over the configured fallback; spans whose end precedes their
/// start count as zero.
pub fn calculate_work_time(schedule: &DaySchedule, cfg: &WorkTimeConfig) -> WorkTimeResult {
    let (entry, exit) = match (&schedule.entry, &schedule.exit) {
        (Some(entry), Some(exit)) => (entry.time, exit.time),
        _ => return WorkTimeResult::default(),
    };

    let total_hours = span_hours(entry, exit);

    let lunch_hours = match (&schedule.lunch_out, &schedule.lunch_return) {
        (Some(out), Some(back)) => span_hours(out.time, back.time),
        _ => cfg.lunch_break_hours,
    };

    let worked_hours = (total_hours - lunch_hours).max(0.0);

    let diff = worked_hours - cfg.daily_work_hours;

    WorkTimeResult {
        total_hours: round2(total_hours),
        worked_hours: round2(worked_hours),
        lunch_hours: round2(lunch_hours),
        overtime_hours: round2(diff.max(0.0)),
        deficit_hours: round2((-diff).max(0.0)),
        is_complete: true,
    }
}
