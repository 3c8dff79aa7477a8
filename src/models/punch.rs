use super::punch_type::PunchType;
use crate::errors::AppResult;
use crate::utils::time::parse_time;
use chrono::{DateTime, Local, NaiveTime};
use serde::Serialize;

/// A single clock event.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Punch {
    pub kind: PunchType,                // ⇔ punches.kind
    #[serde(serialize_with = "serialize_hhmm")]
    pub time: NaiveTime,                // ⇔ punches.time (TEXT "HH:MM")
    pub captured_at: DateTime<Local>,   // ⇔ punches.captured_at (TEXT, RFC 3339)
    pub label: String,                  // ⇔ punches.label
}

impl Punch {
    /// Build a punch from an already parsed time, stamping `captured_at = now`.
    pub fn new(kind: PunchType, time: NaiveTime, label: Option<String>) -> Self {
        Self {
            kind,
            time,
            captured_at: Local::now(),
            label: label.unwrap_or_else(|| kind.label().to_string()),
        }
    }

    /// Ingestion entry point: `time` must be a strict `HH:MM` string.
    pub fn parse(kind: PunchType, time: &str, label: Option<String>) -> AppResult<Self> {
        Ok(Self::new(kind, parse_time(time)?, label))
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

fn serialize_hhmm<S: serde::Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.format("%H:%M").to_string())
}
