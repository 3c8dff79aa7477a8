use rtimebank::core::calculator::{bank_hours, calculate_work_time, monthly_stats, period_stats};
use rtimebank::models::work_time::{WorkTimeConfig, WorkTimeResult};
use rtimebank::utils::formatting::{format_bank_hours, format_hours};

mod common;
use common::{record, schedule};

fn cfg() -> WorkTimeConfig {
    WorkTimeConfig::new(8.0, 1.0).expect("valid config")
}

#[test]
fn test_full_day_standard_mode() {
    let s = schedule(Some("08:00"), Some("12:00"), Some("13:00"), Some("17:00"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.total_hours, 9.0);
    assert_eq!(r.lunch_hours, 1.0);
    assert_eq!(r.worked_hours, 8.0);
    assert_eq!(r.overtime_hours, 0.0);
    assert_eq!(r.deficit_hours, 0.0);
    assert!(r.is_complete);
    assert_eq!(format_hours(r.worked_hours), "08:00");
}

#[test]
fn test_default_lunch_applied_without_lunch_punches() {
    let s = schedule(Some("08:00"), None, None, Some("16:30"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.total_hours, 8.5);
    assert_eq!(r.lunch_hours, 1.0);
    assert_eq!(r.worked_hours, 7.5);
    assert_eq!(r.deficit_hours, 0.5);
    assert_eq!(r.overtime_hours, 0.0);
    assert_eq!(format_bank_hours(r.balance()), "-00:30");
}

#[test]
fn test_half_lunch_falls_back_to_default() {
    let s = schedule(Some("08:00"), Some("12:00"), None, Some("17:00"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.lunch_hours, 1.0);
    assert_eq!(r.worked_hours, 8.0);
}

#[test]
fn test_empty_day_is_all_zero() {
    let s = schedule(None, None, None, None);
    assert_eq!(calculate_work_time(&s, &cfg()), WorkTimeResult::default());
}

#[test]
fn test_missing_exit_gets_no_partial_credit() {
    let s = schedule(Some("08:00"), Some("12:00"), Some("13:00"), None);
    let r = calculate_work_time(&s, &cfg());

    assert!(!r.is_complete);
    assert_eq!(r.worked_hours, 0.0);
}

#[test]
fn test_overtime_and_deficit_are_exclusive() {
    let s = schedule(Some("07:30"), Some("12:00"), Some("12:30"), Some("18:15"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.worked_hours, 10.25);
    assert_eq!(r.overtime_hours, 2.25);
    assert_eq!(r.deficit_hours, 0.0);
    assert_eq!(r.balance(), 2.25);
}

#[test]
fn test_lunch_longer_than_day_clamps_to_zero() {
    let s = schedule(Some("08:00"), None, None, Some("08:30"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.worked_hours, 0.0);
    assert_eq!(r.deficit_hours, 8.0);
}

#[test]
fn test_inverted_spans_count_as_zero() {
    let s = schedule(Some("17:00"), None, None, Some("08:00"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.total_hours, 0.0);
    assert_eq!(r.worked_hours, 0.0);
    assert!(r.is_complete);
}

#[test]
fn test_results_are_rounded_to_two_decimals() {
    // 08:00 → 16:20 is 8.333… hours
    let s = schedule(Some("08:00"), Some("12:00"), Some("12:00"), Some("16:20"));
    let r = calculate_work_time(&s, &cfg());

    assert_eq!(r.total_hours, 8.33);
    assert_eq!(r.worked_hours, 8.33);
    assert_eq!(r.lunch_hours, 0.0);
    assert_eq!(r.overtime_hours, 0.33);
}

#[test]
fn test_config_rejects_non_positive_values() {
    assert!(WorkTimeConfig::new(0.0, 1.0).is_err());
    assert!(WorkTimeConfig::new(8.0, -1.0).is_err());
    assert!(WorkTimeConfig::new(f64::NAN, 1.0).is_err());
}

#[test]
fn test_bank_over_two_days() {
    let days = vec![
        record("2025-09-01", Some("08:00"), Some("18:00")),
        record("2025-09-02", Some("08:00"), Some("16:00")),
    ];
    let bank = bank_hours(&days, &cfg());

    assert_eq!(bank.total, 0.0);
    assert_eq!(bank.positive, 1.0);
    assert_eq!(bank.negative, 1.0);
    assert_eq!(bank.average_daily, 0.0);
    assert_eq!(format_bank_hours(bank.total), "+00:00");
}

#[test]
fn test_bank_skips_incomplete_days() {
    let days = vec![
        record("2025-09-01", Some("08:00"), Some("18:00")),
        record("2025-09-02", Some("08:00"), None),
        record("2025-09-03", None, None),
    ];
    let bank = bank_hours(&days, &cfg());

    assert_eq!(bank.total, 1.0);
    assert_eq!(bank.average_daily, 1.0);
}

#[test]
fn test_bank_of_nothing_is_zero() {
    let bank = bank_hours(&[], &cfg());
    assert_eq!(bank.total, 0.0);
    assert_eq!(bank.average_daily, 0.0);
}

#[test]
fn test_period_stats_counts_all_days_but_sums_complete_ones() {
    let days = vec![
        record("2025-09-01", Some("08:00"), Some("17:00")),
        record("2025-09-02", Some("08:00"), Some("18:00")),
        record("2025-09-03", Some("08:00"), Some("15:30")),
        record("2025-09-04", Some("09:00"), None),
    ];
    let stats = period_stats(&days, &cfg());

    assert_eq!(stats.total_days, 4);
    assert_eq!(stats.complete_days, 3);
    assert_eq!(stats.total_worked_hours, 23.5);
    assert_eq!(stats.total_overtime_hours, 1.0);
    assert_eq!(stats.total_deficit_hours, 1.5);
    assert_eq!(stats.average_daily_hours, 7.83);
}

#[test]
fn test_monthly_stats_are_grouped_and_ordered() {
    let days = vec![
        record("2025-10-01", Some("08:00"), Some("17:00")),
        record("2025-09-30", Some("08:00"), Some("18:00")),
        record("2025-09-29", Some("08:00"), None),
    ];
    let months = monthly_stats(&days, &cfg());

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month, "2025-09");
    assert_eq!(months[0].stats.total_days, 2);
    assert_eq!(months[0].stats.total_worked_hours, 9.0);
    assert_eq!(months[1].month, "2025-10");
    assert_eq!(months[1].stats.average_daily_hours, 8.0);
}

#[test]
fn test_worked_never_negative_and_one_side_of_balance() {
    let quarter = |q: u32| format!("{:02}:{:02}", q / 4, (q % 4) * 15);

    for entry in (24..48).step_by(3) {
        for exit in (entry + 1..96).step_by(5) {
            let s = schedule(
                Some(quarter(entry).as_str()),
                None,
                None,
                Some(quarter(exit).as_str()),
            );
            let r = calculate_work_time(&s, &cfg());

            assert!(r.is_complete);
            assert_eq!(r.worked_hours, (r.total_hours - r.lunch_hours).max(0.0));
            assert!(r.overtime_hours == 0.0 || r.deficit_hours == 0.0);
        }
    }
}
