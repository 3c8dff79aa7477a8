use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::estimate_remaining;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_day;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_balance, color_for_state};
use crate::utils::date::resolve_day;
use crate::utils::formatting::{format_bank_hours, format_hours, mins2readable};
use crate::utils::time::{now_hhmm, parse_optional_time};
use chrono::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, at } = cmd {
        let work_time = cfg.work_time()?;
        let d = resolve_day(date.as_deref())?;
        let now = parse_optional_time(at.as_ref())?.unwrap_or_else(now_hhmm);

        let pool = DbPool::new(&cfg.database)?;
        let record = load_day(&pool.conn, &cfg.owner_id, d)?
            .unwrap_or_else(|| DayRecord::new(&cfg.owner_id, d, Vec::new()));

        let summary = Core::build_daily_summary(&record, &work_time, cfg.require_lunch);
        let state = summary.status.state;

        header(d);
        println!(
            "State:       {}{}{}",
            color_for_state(state),
            state.as_str(),
            RESET
        );
        println!("Next action: {}", summary.status.next_action.label());

        for p in record.schedule().punches() {
            println!("  {:<13} {}", p.label, p.time_str());
        }

        if summary.result.is_complete {
            let r = summary.result;
            println!("Total:       {}", format_hours(r.total_hours));
            println!("Lunch:       {}", format_hours(r.lunch_hours));
            println!("Worked:      {}", format_hours(r.worked_hours));
            println!(
                "Balance:     {}{}{}",
                color_for_balance(r.balance()),
                format_bank_hours(r.balance()),
                RESET
            );
        } else if state.is_in_progress() {
            let remaining = estimate_remaining(&record.schedule(), &work_time, now);
            let exit_at = now + Duration::minutes(remaining.total_minutes());

            println!(
                "Remaining:   {}",
                mins2readable(remaining.total_minutes(), false, false)
            );
            println!("Estimated exit: {}", exit_at.format("%H:%M"));
        }
    }

    Ok(())
}
