#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimebank::models::day_record::DayRecord;
use rtimebank::models::day_schedule::DaySchedule;
use rtimebank::models::punch::Punch;
use rtimebank::models::punch_type::PunchType;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so that a
/// real user configuration never leaks into the tests.
pub fn rti() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimebank_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimebank");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimebank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn punch(db_path: &str, date: &str, kind: &str, at: &str) {
    rti()
        .args(["--db", db_path, "punch", date, "--kind", kind, "--at", at])
        .assert()
        .success();
}

/// Initialize DB and add a small September 2025 dataset:
/// - 09-01: 08:00 / 12:00 / 13:00 / 17:00 → worked 8h, balance 0
/// - 09-02: 08:00 / 18:00, no lunch punches → worked 9h, +1h
/// - 09-03: 08:00 / 12:00 / 12:30 / 15:00 → worked 6.5h, -1.5h
/// - 09-04: entry 09:00 only → in progress
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    punch(db_path, "2025-09-01", "entry", "08:00");
    punch(db_path, "2025-09-01", "lunch-out", "12:00");
    punch(db_path, "2025-09-01", "lunch-return", "13:00");
    punch(db_path, "2025-09-01", "exit", "17:00");

    punch(db_path, "2025-09-02", "entry", "08:00");
    punch(db_path, "2025-09-02", "exit", "18:00");

    punch(db_path, "2025-09-03", "entry", "08:00");
    punch(db_path, "2025-09-03", "lunch-out", "12:00");
    punch(db_path, "2025-09-03", "lunch-return", "12:30");
    punch(db_path, "2025-09-03", "exit", "15:00");

    punch(db_path, "2025-09-04", "entry", "09:00");
}

/// Build a schedule from optional `HH:MM` strings, in canonical order.
pub fn schedule(
    entry: Option<&str>,
    lunch_out: Option<&str>,
    lunch_return: Option<&str>,
    exit: Option<&str>,
) -> DaySchedule {
    DaySchedule::from_punches(&punches(entry, lunch_out, lunch_return, exit))
}

pub fn punches(
    entry: Option<&str>,
    lunch_out: Option<&str>,
    lunch_return: Option<&str>,
    exit: Option<&str>,
) -> Vec<Punch> {
    PunchType::ALL
        .into_iter()
        .zip([entry, lunch_out, lunch_return, exit])
        .filter_map(|(kind, t)| t.map(|t| Punch::parse(kind, t, None).expect("valid time")))
        .collect()
}

pub fn record(date: &str, entry: Option<&str>, exit: Option<&str>) -> DayRecord {
    DayRecord::new(
        "tester",
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
        punches(entry, None, None, exit),
    )
}
