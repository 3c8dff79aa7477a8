//! Versioned schema migrations.
//!
//! Each migration runs once inside a transaction and is recorded in the
//! `log` table as a `migration_applied` row whose target is its version.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "0001_create_day_records",
        description: "Created day_records table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS day_records (
            owner_id    TEXT NOT NULL,
            date        TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            PRIMARY KEY (owner_id, date)
        );
        "#,
    },
    Migration {
        version: "0002_create_punches",
        description: "Created punches table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id     TEXT NOT NULL,
            date         TEXT NOT NULL,
            kind         TEXT NOT NULL
                         CHECK(kind IN ('entry','lunch_out','lunch_return','exit')),
            time         TEXT NOT NULL,
            captured_at  TEXT NOT NULL,
            label        TEXT NOT NULL DEFAULT '',
            UNIQUE (owner_id, date, kind),
            FOREIGN KEY (owner_id, date)
                REFERENCES day_records(owner_id, date) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_punches_owner_date ON punches(owner_id, date);
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

/// Versions known to this build that are recorded as applied.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}
