use predicates::prelude::*;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, punch, rti, setup_test_db, temp_out};

#[test]
fn test_init_creates_db() {
    let db_path = setup_test_db("init_creates_db");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_punch_full_day_and_status() {
    let db_path = setup_test_db("punch_full_day");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "punch", "2025-09-01", "--kind", "entry", "--at", "08:00"])
        .assert()
        .success()
        .stdout(contains("Registered entry at 08:00 on 2025-09-01"));

    punch(&db_path, "2025-09-01", "lunch-out", "12:00");
    punch(&db_path, "2025-09-01", "lunch-return", "13:00");
    punch(&db_path, "2025-09-01", "exit", "17:00");

    rti()
        .args(["--db", &db_path, "status", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("finished"))
        .stdout(contains("day complete"))
        .stdout(contains("Worked:      08:00"))
        .stdout(contains("+00:00"));
}

#[test]
fn test_punch_without_kind_follows_next_action() {
    let db_path = setup_test_db("punch_auto_kind");
    init_db(&db_path);

    for at in ["08:00", "12:00", "12:45", "16:45"] {
        rti()
            .args(["--db", &db_path, "punch", "2025-09-05", "--at", at])
            .assert()
            .success();
    }

    rti()
        .args(["--db", &db_path, "status", "2025-09-05"])
        .assert()
        .success()
        .stdout(contains("Lunch:       00:45"))
        .stdout(contains("Worked:      08:00"));

    rti()
        .args(["--db", &db_path, "punch", "2025-09-05", "--at", "17:30"])
        .assert()
        .failure()
        .stderr(contains("already complete"));
}

#[test]
fn test_status_in_progress_shows_countdown() {
    let db_path = setup_test_db("status_in_progress");
    init_db(&db_path);
    punch(&db_path, "2025-09-04", "entry", "08:00");

    rti()
        .args(["--db", &db_path, "status", "2025-09-04", "--at", "10:30"])
        .assert()
        .success()
        .stdout(contains("working"))
        .stdout(contains("register lunch-out"))
        .stdout(contains("05h 30m"))
        .stdout(contains("Estimated exit: 16:00"));
}

#[test]
fn test_status_of_empty_day() {
    let db_path = setup_test_db("status_empty_day");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "status", "2025-09-10", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("not_started"))
        .stdout(contains("register entry"));
}

#[test]
fn test_duplicate_punch_is_rejected_unless_edit() {
    let db_path = setup_test_db("duplicate_punch");
    init_db(&db_path);
    punch(&db_path, "2025-09-01", "entry", "08:00");

    rti()
        .args(["--db", &db_path, "punch", "2025-09-01", "--kind", "entry", "--at", "07:45"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rti()
        .args([
            "--db", &db_path, "punch", "2025-09-01", "--kind", "entry", "--at", "07:45", "--edit",
        ])
        .assert()
        .success()
        .stdout(contains("Updated entry at 07:45"));
}

#[test]
fn test_inverted_punch_is_rejected() {
    let db_path = setup_test_db("inverted_punch");
    init_db(&db_path);
    punch(&db_path, "2025-09-01", "entry", "08:00");

    rti()
        .args(["--db", &db_path, "punch", "2025-09-01", "--kind", "exit", "--at", "07:00"])
        .assert()
        .failure()
        .stderr(contains("must be later than"));

    // nothing was written
    rti()
        .args(["--db", &db_path, "status", "2025-09-01", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("working"));
}

#[test]
fn test_malformed_time_is_rejected() {
    let db_path = setup_test_db("malformed_time");
    init_db(&db_path);

    for bad in ["8:00", "24:00", "12:60"] {
        rti()
            .args(["--db", &db_path, "punch", "2025-09-01", "--kind", "entry", "--at", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid time format"));
    }
}

#[test]
fn test_unknown_punch_type_is_rejected() {
    let db_path = setup_test_db("unknown_punch_type");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "punch", "2025-09-01", "--kind", "coffee", "--at", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch type"));
}

#[test]
fn test_list_shows_days_and_bank() {
    let db_path = setup_test_db("list_days");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-04"))
        .stdout(contains("finished"))
        .stdout(contains("working"))
        .stdout(contains("Bank of hours:"))
        .stdout(contains("-00:30"));
}

#[test]
fn test_list_single_day() {
    let db_path = setup_test_db("list_single_day");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("2025-09-02"))
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_bank_for_month() {
    let db_path = setup_test_db("bank_month");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "bank", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Balance:        ").and(contains("-00:30")))
        .stdout(contains("+01:00"))
        .stdout(contains("-01:30"))
        .stdout(contains("Daily average:  -00:10"));
}

#[test]
fn test_bank_of_empty_range_is_zero() {
    let db_path = setup_test_db("bank_empty");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "bank", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("+00:00"));
}

#[test]
fn test_stats_for_month() {
    let db_path = setup_test_db("stats_month");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "stats", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("4 (3 complete)"))
        .stdout(contains("23:30"))
        .stdout(contains("07:50"));
}

#[test]
fn test_stats_monthly_breakdown() {
    let db_path = setup_test_db("stats_monthly");
    init_db_with_data(&db_path);
    punch(&db_path, "2025-10-01", "entry", "08:00");
    punch(&db_path, "2025-10-01", "exit", "17:00");

    rti()
        .args(["--db", &db_path, "stats", "--period", "all", "--monthly"])
        .assert()
        .success()
        .stdout(contains("2025-09"))
        .stdout(contains("2025-10"));
}

#[test]
fn test_invalid_period_is_rejected() {
    let db_path = setup_test_db("invalid_period");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09-30:2025-09-01"])
        .assert()
        .failure();
}

#[test]
fn test_del_single_punch_and_whole_day() {
    let db_path = setup_test_db("del_punches");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "del", "2025-09-01", "--kind", "exit", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 punch(es) removed"));

    rti()
        .args(["--db", &db_path, "status", "2025-09-01", "--at", "16:00"])
        .assert()
        .success()
        .stdout(contains("register exit"));

    rti()
        .args(["--db", &db_path, "del", "2025-09-04", "--yes"])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-04").not());
}

#[test]
fn test_del_missing_day_fails() {
    let db_path = setup_test_db("del_missing");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "del", "2025-01-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No record found"));
}

#[test]
fn test_owners_are_isolated() {
    let db_path = setup_test_db("owners_isolated");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "--owner", "alice", "punch", "2025-09-01", "--kind", "entry", "--at",
            "08:00",
        ])
        .assert()
        .success();

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("No records"));

    rti()
        .args(["--db", &db_path, "--owner", "alice", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_operations");
    init_db(&db_path);
    punch(&db_path, "2025-09-01", "entry", "08:00");

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("punch"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_unreadable_punch_does_not_break_the_period() {
    let db_path = setup_test_db("unreadable_punch");
    init_db_with_data(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute(
            "UPDATE punches SET time = '9h' WHERE date = '2025-09-04' AND kind = 'entry'",
            [],
        )
        .expect("corrupt row");
    }

    rti()
        .args(["--db", &db_path, "bank", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Skipping unreadable entry punch of 2025-09-04"))
        .stdout(contains("-00:30"));

    rti()
        .args(["--db", &db_path, "stats", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("4 (3 complete)"));
}

#[test]
fn test_unreadable_punch_leaves_its_day_incomplete() {
    let db_path = setup_test_db("unreadable_exit");
    init_db_with_data(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute(
            "UPDATE punches SET time = 'late' WHERE date = '2025-09-03' AND kind = 'exit'",
            [],
        )
        .expect("corrupt row");
    }

    // only 09-01 (0h) and 09-02 (+1h) still count
    rti()
        .args(["--db", &db_path, "bank", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Balance:        ").and(contains("+01:00")))
        .stdout(contains("Deficit:        ").and(contains("+00:00")));
}

#[test]
fn test_log_width_counts_characters() {
    let db_path = setup_test_db("log_width");
    let out = temp_out("lòg_wìdth_backup_target", "sqlite");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success();

    // the backup target is the widest entry, so nothing pads it
    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains(format!(" ({}) => ", out)));
}
