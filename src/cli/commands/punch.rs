use super::parse_kind;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::resolve_day;
use crate::utils::time::{now_hhmm, parse_optional_time};

/// Register a punch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        date,
        kind,
        at,
        label,
        edit,
    } = cmd
    {
        //
        // 1. Parse inputs before touching the database
        //
        let d = resolve_day(date.as_deref())?;
        let kind = parse_kind(kind.as_deref())?;
        let time = parse_optional_time(at.as_ref())?.unwrap_or_else(now_hhmm);

        //
        // 2. Open DB and apply
        //
        let mut pool = DbPool::new(&cfg.database)?;

        PunchLogic::apply(
            &mut pool,
            &cfg.owner_id,
            cfg.require_lunch,
            PunchRequest {
                date: d,
                kind,
                time,
                label: label.clone(),
                edit: *edit,
            },
        )?;
    }

    Ok(())
}
