use crate::core::calculator::derive_status;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{load_day, upsert_punch};
use crate::errors::{AppError, AppResult};
use crate::models::day_schedule::DaySchedule;
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `punch` command.
pub struct PunchLogic;

/// What to record; `kind = None` lets the day state machine decide.
pub struct PunchRequest {
    pub date: NaiveDate,
    pub kind: Option<PunchType>,
    pub time: NaiveTime,
    pub label: Option<String>,
    pub edit: bool,
}

impl PunchLogic {
    /// Validate and store one punch, returning what was stored.
    ///
    /// The candidate day (existing punches plus the new one) must keep its
    /// punches strictly increasing in canonical order, otherwise nothing is
    /// written.
    pub fn apply(
        pool: &mut DbPool,
        owner_id: &str,
        require_lunch: bool,
        req: PunchRequest,
    ) -> AppResult<Punch> {
        let date_str = req.date.format("%Y-%m-%d").to_string();

        let schedule = load_day(&pool.conn, owner_id, req.date)?
            .map(|r| r.schedule())
            .unwrap_or_default();

        // ------------------------------------------------
        // Resolve punch type
        // ------------------------------------------------
        let kind = match req.kind {
            Some(k) => k,
            None => derive_status(&schedule, require_lunch)
                .next_action
                .punch_type()
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "the day {} is already complete (use --kind with --edit to change a punch)",
                        date_str
                    ))
                })?,
        };

        let replacing = schedule.has(kind);
        if replacing && !req.edit {
            return Err(AppError::DuplicatePunch {
                date: date_str,
                kind: kind.to_db_str().to_string(),
            });
        }

        // ------------------------------------------------
        // Validate the day as it would look after the write
        // ------------------------------------------------
        let punch = Punch::new(kind, req.time, req.label);

        let mut candidate: DaySchedule = schedule;
        candidate.set(punch.clone());
        candidate.validate()?;

        upsert_punch(&pool.conn, owner_id, req.date, &punch)?;

        let operation = if replacing { "edit" } else { "punch" };
        ttlog_lenient(
            &pool.conn,
            operation,
            &format!("{} {}", date_str, kind.to_db_str()),
            &format!("{} at {} for {}", punch.label, punch.time_str(), owner_id),
        );

        let verb = if replacing { "Updated" } else { "Registered" };
        success(format!(
            "{} {} at {} on {}.",
            verb,
            kind.label().to_lowercase(),
            punch.time_str(),
            date_str
        ));

        Ok(punch)
    }
}
