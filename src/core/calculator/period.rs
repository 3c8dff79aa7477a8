use super::daily::calculate_work_time;
use crate::models::day_record::DayRecord;
use crate::models::summaries::{MonthlyStats, PeriodStats};
use crate::models::work_time::WorkTimeConfig;
use crate::utils::time::round2;
use std::collections::BTreeMap;

/// Totals and averages over `records`. `total_days` counts every record
/// passed in, the sums only cover complete days.
pub fn period_stats(records: &[DayRecord], cfg: &WorkTimeConfig) -> PeriodStats {
    let mut stats = PeriodStats {
        total_days: records.len(),
        ..Default::default()
    };

    for record in records {
        let result = calculate_work_time(&record.schedule(), cfg);
        if !result.is_complete {
            continue;
        }

        stats.total_worked_hours += result.worked_hours;
        stats.total_overtime_hours += result.overtime_hours;
        stats.total_deficit_hours += result.deficit_hours;
        stats.complete_days += 1;
    }

    if stats.complete_days > 0 {
        stats.average_daily_hours = stats.total_worked_hours / stats.complete_days as f64;
    }

    PeriodStats {
        total_worked_hours: round2(stats.total_worked_hours),
        total_overtime_hours: round2(stats.total_overtime_hours),
        total_deficit_hours: round2(stats.total_deficit_hours),
        average_daily_hours: round2(stats.average_daily_hours),
        ..stats
    }
}

/// `period_stats` per calendar month, ascending.
pub fn monthly_stats(records: &[DayRecord], cfg: &WorkTimeConfig) -> Vec<MonthlyStats> {
    let mut by_month: BTreeMap<String, Vec<DayRecord>> = BTreeMap::new();

    for record in records {
        by_month
            .entry(record.date.format("%Y-%m").to_string())
            .or_default()
            .push(record.clone());
    }

    by_month
        .into_iter()
        .map(|(month, days)| MonthlyStats {
            stats: period_stats(&days, cfg),
            month,
        })
        .collect()
}
