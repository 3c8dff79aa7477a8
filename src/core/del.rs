use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_day, delete_punch, load_day};
use crate::errors::{AppError, AppResult};
use crate::models::punch_type::PunchType;
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one punch (`kind = Some`) or the whole day. Returns the number
    /// of punches removed.
    pub fn apply(
        pool: &mut DbPool,
        owner_id: &str,
        date: NaiveDate,
        kind: Option<PunchType>,
    ) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let record =
            load_day(&pool.conn, owner_id, date)?.ok_or_else(|| AppError::NoRecordForDate(date_str.clone()))?;

        let removed = match kind {
            Some(k) => {
                if !record.schedule().has(k) {
                    return Err(AppError::NoRecordForDate(format!(
                        "{} ({} punch)",
                        date_str,
                        k.to_db_str()
                    )));
                }
                delete_punch(&pool.conn, owner_id, date, k)?;
                info(format!("Deleted {} punch for {}", k.to_db_str(), date_str));
                1
            }
            None => {
                delete_day(&pool.conn, owner_id, date)?;
                info(format!("Deleted all punches for {}", date_str));
                record.punches.len()
            }
        };

        let target = match kind {
            Some(k) => format!("{} {}", date_str, k.to_db_str()),
            None => date_str,
        };
        ttlog_lenient(
            &pool.conn,
            "del",
            &target,
            &format!("Removed {} punch(es) for {}", removed, owner_id),
        );

        Ok(removed)
    }
}
