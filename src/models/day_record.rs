use super::day_schedule::DaySchedule;
use super::punch::Punch;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// All punches of one owner for one calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub owner_id: String,             // ⇔ day_records.owner_id
    pub date: NaiveDate,              // ⇔ day_records.date (TEXT "YYYY-MM-DD")
    pub punches: Vec<Punch>,          // ⇔ punches rows for (owner_id, date)
    pub created_at: DateTime<Local>,  // ⇔ day_records.created_at
    pub updated_at: DateTime<Local>,  // ⇔ day_records.updated_at
}

impl DayRecord {
    pub fn new(owner_id: &str, date: NaiveDate, punches: Vec<Punch>) -> Self {
        let now = Local::now();
        Self {
            owner_id: owner_id.to_string(),
            date,
            punches,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn schedule(&self) -> DaySchedule {
        DaySchedule::from_punches(&self.punches)
    }
}
