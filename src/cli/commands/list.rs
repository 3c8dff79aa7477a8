use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::bank_hours;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_days;
use crate::errors::AppResult;
use crate::models::punch_type::PunchType;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_balance, color_for_state};
use crate::utils::date::{resolve_period, today};
use crate::utils::formatting::{bold, format_bank_hours, format_hours};
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let work_time = cfg.work_time()?;
        let range = resolve_period(period.as_deref(), today())?;

        let pool = DbPool::new(&cfg.database)?;
        let records = load_days(&pool.conn, &cfg.owner_id, range)?;

        if records.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("DATE", 10),
            Column::left("STATUS", 11),
            Column::left("ENTRY", 5),
            Column::left("L-OUT", 5),
            Column::left("L-RET", 5),
            Column::left("EXIT", 5),
            Column::right("LUNCH", 6),
            Column::right("WORKED", 6),
            Column::right("BALANCE", 7),
        ]);

        for record in &records {
            let summary = Core::build_daily_summary(record, &work_time, cfg.require_lunch);
            let schedule = record.schedule();

            let time_cell = |k: PunchType| match schedule.get(k) {
                Some(p) => Cell::plain(p.time_str()),
                None => Cell::colored("--:--", GREY),
            };

            let (lunch, worked, balance) = if summary.result.is_complete {
                let balance = summary.result.balance();
                (
                    Cell::plain(format_hours(summary.result.lunch_hours)),
                    Cell::plain(format_hours(summary.result.worked_hours)),
                    Cell::colored(format_bank_hours(balance), color_for_balance(balance)),
                )
            } else {
                (
                    Cell::colored("--:--", GREY),
                    Cell::colored("--:--", GREY),
                    Cell::colored("--:--", GREY),
                )
            };

            table.add_row(vec![
                Cell::plain(record.date_str()),
                Cell::colored(
                    summary.status.state.as_str(),
                    color_for_state(summary.status.state),
                ),
                time_cell(PunchType::Entry),
                time_cell(PunchType::LunchOut),
                time_cell(PunchType::LunchReturn),
                time_cell(PunchType::Exit),
                lunch,
                worked,
                balance,
            ]);
        }

        println!("{}", table.render());

        let bank = bank_hours(&records, &work_time);
        println!(
            "{} {}{}{}",
            bold("Bank of hours:"),
            color_for_balance(bank.total),
            format_bank_hours(bank.total),
            RESET
        );
    }
    Ok(())
}
