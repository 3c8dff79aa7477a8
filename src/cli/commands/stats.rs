use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{monthly_stats, period_stats};
use crate::db::pool::DbPool;
use crate::db::queries::load_days;
use crate::errors::AppResult;
use crate::models::summaries::PeriodStats;
use crate::ui::messages::header;
use crate::utils::date::{resolve_period, today};
use crate::utils::formatting::format_hours;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period, monthly } = cmd {
        let work_time = cfg.work_time()?;
        let range = resolve_period(period.as_deref(), today())?;

        let pool = DbPool::new(&cfg.database)?;
        let records = load_days(&pool.conn, &cfg.owner_id, range)?;

        if *monthly {
            header("Monthly statistics");

            let mut table = Table::new(vec![
                Column::left("MONTH", 7),
                Column::right("DAYS", 4),
                Column::right("COMPLETE", 8),
                Column::right("WORKED", 7),
                Column::right("OVERTIME", 8),
                Column::right("DEFICIT", 7),
                Column::right("AVERAGE", 7),
            ]);

            for m in monthly_stats(&records, &work_time) {
                let s = m.stats;
                table.add_row(vec![
                    Cell::plain(m.month),
                    Cell::plain(s.total_days.to_string()),
                    Cell::plain(s.complete_days.to_string()),
                    Cell::plain(format_hours(s.total_worked_hours)),
                    Cell::plain(format_hours(s.total_overtime_hours)),
                    Cell::plain(format_hours(s.total_deficit_hours)),
                    Cell::plain(format_hours(s.average_daily_hours)),
                ]);
            }

            println!("{}", table.render());
            return Ok(());
        }

        match range {
            Some(r) => header(format!("Statistics {} → {}", r.from, r.to)),
            None => header("Statistics (all records)"),
        }
        print_stats(&period_stats(&records, &work_time));
    }

    Ok(())
}

fn print_stats(s: &PeriodStats) {
    println!("Days:           {} ({} complete)", s.total_days, s.complete_days);
    println!("Worked:         {}", format_hours(s.total_worked_hours));
    println!("Overtime:       {}", format_hours(s.total_overtime_hours));
    println!("Deficit:        {}", format_hours(s.total_deficit_hours));
    println!("Daily average:  {}", format_hours(s.average_daily_hours));
}
