use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::bank_hours;
use crate::db::pool::DbPool;
use crate::db::queries::load_days;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RED, RESET, color_for_balance};
use crate::utils::date::{resolve_period, today};
use crate::utils::formatting::format_bank_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bank { period } = cmd {
        let work_time = cfg.work_time()?;
        let range = resolve_period(period.as_deref(), today())?;

        let pool = DbPool::new(&cfg.database)?;
        let records = load_days(&pool.conn, &cfg.owner_id, range)?;
        let bank = bank_hours(&records, &work_time);

        match range {
            Some(r) => header(format!("Bank of hours {} → {}", r.from, r.to)),
            None => header("Bank of hours (all records)"),
        }

        println!(
            "Balance:        {}{}{}",
            color_for_balance(bank.total),
            format_bank_hours(bank.total),
            RESET
        );
        println!("Overtime:       {}{}{}", GREEN, format_bank_hours(bank.positive), RESET);
        println!("Deficit:        {}{}{}", RED, format_bank_hours(-bank.negative), RESET);
        println!("Daily average:  {}", format_bank_hours(bank.average_daily));
    }

    Ok(())
}
