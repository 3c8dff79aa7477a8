use super::parse_kind;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        kind,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let kind = parse_kind(kind.as_deref())?;

        //
        // Confirmation prompt
        //
        let prompt = match kind {
            Some(k) => format!(
                "Delete the {} punch of {}? This action is irreversible.",
                k.to_db_str(),
                d
            ),
            None => format!("Delete ALL punches of {}? This action is irreversible.", d),
        };

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = DeleteLogic::apply(&mut pool, &cfg.owner_id, d, kind)?;

        success(format!("{} punch(es) removed for {}.", removed, d));
    }

    Ok(())
}
