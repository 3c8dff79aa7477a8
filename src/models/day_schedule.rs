//! Per-day punch lookup.
//!
//! Every engine component reads punch presence through this view instead of
//! scanning the raw punch list by type.

use super::punch::Punch;
use super::punch_type::PunchType;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    pub entry: Option<Punch>,
    pub lunch_out: Option<Punch>,
    pub lunch_return: Option<Punch>,
    pub exit: Option<Punch>,
}

impl DaySchedule {
    /// Build the lookup once. A type appearing twice keeps the later punch.
    pub fn from_punches(punches: &[Punch]) -> Self {
        let mut schedule = Self::default();
        for p in punches {
            schedule.set(p.clone());
        }
        schedule
    }

    pub fn get(&self, kind: PunchType) -> Option<&Punch> {
        match kind {
            PunchType::Entry => self.entry.as_ref(),
            PunchType::LunchOut => self.lunch_out.as_ref(),
            PunchType::LunchReturn => self.lunch_return.as_ref(),
            PunchType::Exit => self.exit.as_ref(),
        }
    }

    pub fn has(&self, kind: PunchType) -> bool {
        self.get(kind).is_some()
    }

    /// Insert or replace the punch of the same type, returning the old one.
    pub fn set(&mut self, punch: Punch) -> Option<Punch> {
        let slot = match punch.kind {
            PunchType::Entry => &mut self.entry,
            PunchType::LunchOut => &mut self.lunch_out,
            PunchType::LunchReturn => &mut self.lunch_return,
            PunchType::Exit => &mut self.exit,
        };
        slot.replace(punch)
    }

    /// Present punches in canonical order.
    pub fn punches(&self) -> impl Iterator<Item = &Punch> {
        PunchType::ALL.into_iter().filter_map(|k| self.get(k))
    }

    /// Ingestion check: present punches must be strictly increasing in
    /// canonical order (entry < lunch-out < lunch-return < exit).
    pub fn validate(&self) -> AppResult<()> {
        let mut previous: Option<&Punch> = None;

        for p in self.punches() {
            if let Some(prev) = previous
                && p.time <= prev.time
            {
                return Err(AppError::Validation(format!(
                    "{} at {} must be later than {} at {}",
                    p.kind.label(),
                    p.time_str(),
                    prev.kind.label().to_lowercase(),
                    prev.time_str()
                )));
            }
            previous = Some(p);
        }

        Ok(())
    }
}
