use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportOptions;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        punches,
        force,
    } = cmd
    {
        let work_time = cfg.work_time()?;
        let pool = DbPool::new(&cfg.database)?;

        ExportLogic::export(
            &pool,
            &cfg.owner_id,
            &work_time,
            cfg.require_lunch,
            ExportOptions {
                format: *format,
                file,
                range: range.as_deref(),
                punches: *punches,
                force: *force,
            },
        )?;
    }
    Ok(())
}
