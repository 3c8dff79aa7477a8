use serde::Serialize;

/// The four clock events of a workday, declared in canonical order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PunchType {
    Entry,
    LunchOut,
    LunchReturn,
    Exit,
}

impl PunchType {
    pub const ALL: [PunchType; 4] = [
        PunchType::Entry,
        PunchType::LunchOut,
        PunchType::LunchReturn,
        PunchType::Exit,
    ];

    /// Parse user input: accepts `lunch_out`, `lunch-out` and `lunchout`.
    pub fn pt_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "entry" | "in" => Some(Self::Entry),
            "lunchout" => Some(Self::LunchOut),
            "lunchreturn" | "lunchin" => Some(Self::LunchReturn),
            "exit" | "out" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::Entry => "entry",
            PunchType::LunchOut => "lunch_out",
            PunchType::LunchReturn => "lunch_return",
            PunchType::Exit => "exit",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(PunchType::Entry),
            "lunch_out" => Some(PunchType::LunchOut),
            "lunch_return" => Some(PunchType::LunchReturn),
            "exit" => Some(PunchType::Exit),
            _ => None,
        }
    }

    /// Default display label used when a punch is recorded without one.
    pub fn label(&self) -> &'static str {
        match self {
            PunchType::Entry => "Entry",
            PunchType::LunchOut => "Lunch out",
            PunchType::LunchReturn => "Lunch return",
            PunchType::Exit => "Exit",
        }
    }
}
