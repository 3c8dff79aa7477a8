/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(hours: f64) -> &'static str {
    if hours > 0.0 {
        GREEN
    } else if hours < 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_state(state: crate::models::day_status::DayState) -> &'static str {
    use crate::models::day_status::DayState;

    match state {
        DayState::NotStarted => GREY,
        DayState::Working => CYAN,
        DayState::Lunch => YELLOW,
        DayState::Finished => GREEN,
    }
}
