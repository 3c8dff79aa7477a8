use super::daily::calculate_work_time;
use crate::models::day_record::DayRecord;
use crate::models::summaries::BankHoursSummary;
use crate::models::work_time::WorkTimeConfig;
use crate::utils::time::round2;

/// Signed bank of hours over `records`. Incomplete days are skipped, not
/// counted as zero-balance days.
pub fn bank_hours(records: &[DayRecord], cfg: &WorkTimeConfig) -> BankHoursSummary {
    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut contributing = 0usize;

    for record in records {
        let result = calculate_work_time(&record.schedule(), cfg);
        if !result.is_complete {
            continue;
        }

        positive += result.overtime_hours;
        negative += result.deficit_hours;
        contributing += 1;
    }

    let total = positive - negative;
    let average_daily = if contributing > 0 {
        total / contributing as f64
    } else {
        0.0
    };

    BankHoursSummary {
        total: round2(total),
        positive: round2(positive),
        negative: round2(negative),
        average_daily: round2(average_daily),
    }
}
