use crate::models::day_schedule::DaySchedule;
use crate::models::day_status::{DayState, DayStatus, NextAction};

/// Derive the day state and the next permitted action from punch presence.
///
/// `require_lunch = false` is the simplified mode: lunch punches never hold
/// the day in the `lunch` state and are never asked for.
pub fn derive_status(schedule: &DaySchedule, require_lunch: bool) -> DayStatus {
    if schedule.exit.is_some() {
        return DayStatus {
            state: DayState::Finished,
            next_action: NextAction::DayComplete,
        };
    }

    if schedule.entry.is_none() {
        return DayStatus {
            state: DayState::NotStarted,
            next_action: NextAction::RegisterEntry,
        };
    }

    let on_lunch = schedule.lunch_out.is_some() && schedule.lunch_return.is_none();
    if require_lunch && on_lunch {
        return DayStatus {
            state: DayState::Lunch,
            next_action: NextAction::RegisterLunchReturn,
        };
    }

    let next_action = if require_lunch && schedule.lunch_out.is_none() {
        NextAction::RegisterLunchOut
    } else {
        NextAction::RegisterExit
    };

    DayStatus {
        state: DayState::Working,
        next_action,
    }
}
