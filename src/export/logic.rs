// src/export/logic.rs

use crate::core::calculator::{bank_hours, period_stats};
use crate::core::logic::Core;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::load_days;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, PunchExport, Report};
use crate::models::work_time::WorkTimeConfig;
use crate::ui::messages::warning;
use crate::utils::date::{resolve_period, today};
use crate::utils::path::resolve_output_path;
use std::path::PathBuf;

pub struct ExportOptions<'a> {
    pub format: ExportFormat,
    pub file: &'a str,
    /// `None` exports every record.
    pub range: Option<&'a str>,
    pub punches: bool,
    pub force: bool,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the records of `owner_id`. Returns the written file, or `None`
    /// when the selected range holds no records.
    pub fn export(
        pool: &DbPool,
        owner_id: &str,
        cfg: &WorkTimeConfig,
        require_lunch: bool,
        opts: ExportOptions<'_>,
    ) -> AppResult<Option<PathBuf>> {
        let path = resolve_output_path(opts.file)?;
        ensure_writable(&path, opts.force)?;

        let range = match opts.range {
            None => None,
            Some(r) => resolve_period(Some(r), today())?,
        };

        let records = load_days(&pool.conn, owner_id, range)?;

        if records.is_empty() {
            warning("No records found for selected range.");
            return Ok(None);
        }

        if opts.punches {
            let rows: Vec<PunchExport> = records.iter().flat_map(PunchExport::rows_of).collect();
            match opts.format {
                ExportFormat::Csv => export_csv(&rows, &path)?,
                ExportFormat::Json => export_json(&rows, &path)?,
            }
        } else {
            let days: Vec<DayExport> = records
                .iter()
                .map(|r| DayExport::from_summary(r, &Core::build_daily_summary(r, cfg, require_lunch)))
                .collect();

            match opts.format {
                ExportFormat::Csv => export_csv(&days, &path)?,
                ExportFormat::Json => {
                    let report = Report {
                        owner_id: owner_id.to_string(),
                        from: range.map(|r| r.from.to_string()),
                        to: range.map(|r| r.to.to_string()),
                        bank: bank_hours(&records, cfg),
                        stats: period_stats(&records, cfg),
                        days,
                    };
                    export_json(&report, &path)?
                }
            }
        }

        ttlog_lenient(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} day(s) as {}{}",
                records.len(),
                opts.format.as_str(),
                if opts.punches { " (punches)" } else { "" }
            ),
        );

        Ok(Some(path))
    }
}
