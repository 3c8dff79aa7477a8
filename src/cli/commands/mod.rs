pub mod backup;
pub mod bank;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod stats;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::models::punch_type::PunchType;

/// Parse an optional `--kind` argument.
pub(crate) fn parse_kind(kind: Option<&str>) -> AppResult<Option<PunchType>> {
    kind.map(|k| PunchType::pt_from_str(k).ok_or_else(|| AppError::InvalidPunchType(k.to_string())))
        .transpose()
}
