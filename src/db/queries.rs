//! Persistence of day records and their punches.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use crate::ui::messages::warning;
use crate::utils::date::DateRange;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};

const SELECT_DAYS: &str = r#"
    SELECT d.owner_id, d.date, d.created_at, d.updated_at,
           p.kind, p.time, p.captured_at, p.label
    FROM day_records d
    LEFT JOIN punches p ON p.owner_id = d.owner_id AND p.date = d.date
"#;

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn parse_instant(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw.to_string())))
}

/// One joined row: the day header plus, when present, one of its punches.
struct DayRow {
    owner_id: String,
    date: NaiveDate,
    created_at: DateTime<Local>,
    updated_at: DateTime<Local>,
    punch: Option<Punch>,
}

fn read_punch(row: &Row, kind_str: &str) -> AppResult<Punch> {
    let kind =
        PunchType::from_db_str(kind_str).ok_or_else(|| AppError::InvalidPunchType(kind_str.to_string()))?;

    let time_str: String = row.get("time")?;
    let time =
        NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| AppError::Parse(time_str.clone()))?;

    let captured_at = parse_instant(6, &row.get::<_, String>("captured_at")?)?;

    Ok(Punch {
        kind,
        time,
        captured_at,
        label: row.get("label")?,
    })
}

/// An unreadable punch is skipped with a warning, leaving its day incomplete
/// instead of failing the whole query.
fn map_row(row: &Row) -> rusqlite::Result<DayRow> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let created_at = parse_instant(2, &row.get::<_, String>("created_at")?)?;
    let updated_at = parse_instant(3, &row.get::<_, String>("updated_at")?)?;

    let punch = match row.get::<_, Option<String>>("kind")? {
        None => None,
        Some(kind_str) => match read_punch(row, &kind_str) {
            Ok(p) => Some(p),
            Err(e) => {
                warning(format!(
                    "Skipping unreadable {} punch of {}: {}",
                    kind_str, date_str, e
                ));
                None
            }
        },
    };

    Ok(DayRow {
        owner_id: row.get("owner_id")?,
        date,
        created_at,
        updated_at,
        punch,
    })
}

/// Fold joined rows (ordered by date) into one DayRecord per date.
fn collect_records(rows: Vec<DayRow>) -> Vec<DayRecord> {
    let mut out: Vec<DayRecord> = Vec::new();

    for r in rows {
        if let Some(last) = out.last_mut()
            && last.date == r.date
        {
            last.punches.extend(r.punch);
            continue;
        }

        out.push(DayRecord {
            owner_id: r.owner_id,
            date: r.date,
            punches: r.punch.into_iter().collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        });
    }

    out
}

pub fn load_day(conn: &Connection, owner_id: &str, date: NaiveDate) -> AppResult<Option<DayRecord>> {
    let sql = format!("{SELECT_DAYS} WHERE d.owner_id = ?1 AND d.date = ?2 ORDER BY p.time ASC");
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt
        .query_map(params![owner_id, date.format("%Y-%m-%d").to_string()], map_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(collect_records(rows).pop())
}

/// Records of `owner_id` inside `range` (every record when `None`), by date.
pub fn load_days(
    conn: &Connection,
    owner_id: &str,
    range: Option<DateRange>,
) -> AppResult<Vec<DayRecord>> {
    let rows = match range {
        Some(r) => {
            let sql = format!(
                "{SELECT_DAYS} WHERE d.owner_id = ?1 AND d.date BETWEEN ?2 AND ?3
                 ORDER BY d.date ASC, p.time ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(
                    params![
                        owner_id,
                        r.from.format("%Y-%m-%d").to_string(),
                        r.to.format("%Y-%m-%d").to_string()
                    ],
                    map_row,
                )?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
        None => {
            let sql = format!("{SELECT_DAYS} WHERE d.owner_id = ?1 ORDER BY d.date ASC, p.time ASC");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![owner_id], map_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
    };

    Ok(collect_records(rows))
}

/// Insert the punch, or replace the one of the same type, and touch the day record.
pub fn upsert_punch(conn: &Connection, owner_id: &str, date: NaiveDate, punch: &Punch) -> AppResult<()> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let now = Local::now().to_rfc3339();

    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO day_records (owner_id, date, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)
         ON CONFLICT(owner_id, date) DO UPDATE SET updated_at = excluded.updated_at",
        params![owner_id, date_str, now],
    )?;

    tx.execute(
        "INSERT INTO punches (owner_id, date, kind, time, captured_at, label)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(owner_id, date, kind) DO UPDATE SET
             time = excluded.time,
             captured_at = excluded.captured_at,
             label = excluded.label",
        params![
            owner_id,
            date_str,
            punch.kind.to_db_str(),
            punch.time_str(),
            punch.captured_at.to_rfc3339(),
            punch.label,
        ],
    )?;

    tx.commit()?;
    Ok(())
}

/// Delete one punch. A day left without punches is removed as well.
pub fn delete_punch(conn: &Connection, owner_id: &str, date: NaiveDate, kind: PunchType) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let tx = conn.unchecked_transaction()?;

    let deleted = tx.execute(
        "DELETE FROM punches WHERE owner_id = ?1 AND date = ?2 AND kind = ?3",
        params![owner_id, date_str, kind.to_db_str()],
    )?;

    tx.execute(
        "DELETE FROM day_records
         WHERE owner_id = ?1 AND date = ?2
           AND NOT EXISTS (SELECT 1 FROM punches WHERE owner_id = ?1 AND date = ?2)",
        params![owner_id, date_str],
    )?;

    if deleted > 0 {
        tx.execute(
            "UPDATE day_records SET updated_at = ?3 WHERE owner_id = ?1 AND date = ?2",
            params![owner_id, date_str, Local::now().to_rfc3339()],
        )?;
    }

    tx.commit()?;
    Ok(deleted)
}

/// Delete a day record and, through the cascade, all its punches.
pub fn delete_day(conn: &Connection, owner_id: &str, date: NaiveDate) -> AppResult<usize> {
    let deleted = conn.execute(
        "DELETE FROM day_records WHERE owner_id = ?1 AND date = ?2",
        params![owner_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(deleted)
}
