use super::punch_type::PunchType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    NotStarted,
    Working,
    Lunch,
    Finished,
}

impl DayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayState::NotStarted => "not_started",
            DayState::Working => "working",
            DayState::Lunch => "lunch",
            DayState::Finished => "finished",
        }
    }

    /// States during which a live countdown is meaningful.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, DayState::Working | DayState::Lunch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    RegisterEntry,
    RegisterLunchOut,
    RegisterLunchReturn,
    RegisterExit,
    DayComplete,
}

impl NextAction {
    pub fn label(&self) -> &'static str {
        match self {
            NextAction::RegisterEntry => "register entry",
            NextAction::RegisterLunchOut => "register lunch-out",
            NextAction::RegisterLunchReturn => "register lunch return",
            NextAction::RegisterExit => "register exit",
            NextAction::DayComplete => "day complete",
        }
    }

    /// The punch this action would record, if any.
    pub fn punch_type(&self) -> Option<PunchType> {
        match self {
            NextAction::RegisterEntry => Some(PunchType::Entry),
            NextAction::RegisterLunchOut => Some(PunchType::LunchOut),
            NextAction::RegisterLunchReturn => Some(PunchType::LunchReturn),
            NextAction::RegisterExit => Some(PunchType::Exit),
            NextAction::DayComplete => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStatus {
    pub state: DayState,
    pub next_action: NextAction,
}
