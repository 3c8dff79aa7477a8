use crate::models::day_schedule::DaySchedule;
use crate::models::summaries::TimeRemaining;
use crate::models::work_time::WorkTimeConfig;
use crate::utils::time::span_minutes;
use chrono::NaiveTime;

/// Live countdown towards `daily_work_hours` for the day in `schedule`.
///
/// `now` is the caller's wall-clock time of day. Callers re-invoke this while
/// the day is `working` or `lunch`; nothing is cached between calls.
pub fn estimate_remaining(
    schedule: &DaySchedule,
    cfg: &WorkTimeConfig,
    now: NaiveTime,
) -> TimeRemaining {
    let entry = match (&schedule.entry, &schedule.exit) {
        (Some(entry), None) => entry.time,
        _ => {
            return TimeRemaining {
                hours_remaining: 0,
                minutes_remaining: 0,
                is_complete: true,
            };
        }
    };

    let target_minutes = cfg.daily_work_hours * 60.0;

    if now < entry {
        return split_minutes(target_minutes);
    }

    let lunch_minutes = match (&schedule.lunch_out, &schedule.lunch_return) {
        (Some(out), Some(back)) => span_minutes(out.time, back.time),
        (Some(out), None) => span_minutes(out.time, now),
        _ => 0.0,
    };

    let elapsed = span_minutes(entry, now) - lunch_minutes;

    split_minutes((target_minutes - elapsed).max(0.0))
}

fn split_minutes(remaining: f64) -> TimeRemaining {
    let mut hours = (remaining / 60.0).floor() as i64;
    let mut minutes = (remaining % 60.0).round() as i64;

    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    TimeRemaining {
        hours_remaining: hours,
        minutes_remaining: minutes,
        is_complete: false,
    }
}
