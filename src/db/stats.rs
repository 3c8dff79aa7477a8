use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM day_records", [], |row| row.get(0))?;
    let punches: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM punches", [], |row| row.get(0))?;
    let owners: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT owner_id) FROM day_records",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Owners:{} {}{}{}", CYAN, RESET, GREEN, owners, RESET);
    println!("{}• Day records:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);
    println!("{}• Punches:{} {}{}{}", CYAN, RESET, GREEN, punches, RESET);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM day_records", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) AVERAGE PUNCHES/DAY
    //
    if days > 0 {
        println!(
            "{}• Average punches/day:{} {:.2}",
            CYAN,
            RESET,
            punches as f64 / days as f64
        );
    }

    //
    // 5) SCHEMA
    //
    println!(
        "{}• Migrations:{} {}",
        CYAN,
        RESET,
        applied_versions(&pool.conn)?.join(", ")
    );

    println!();
    Ok(())
}
