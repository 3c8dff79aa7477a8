//! Unified application error type.
//! Every layer (engine ingestion, db, config, cli, export) returns AppError
//! so that failures surface the same way from `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: '{0}' (expected HH:MM, 24-hour)")]
    Parse(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid punch type: {0}")]
    InvalidPunchType(String),

    // ---------------------------
    // Punch validation
    // ---------------------------
    #[error("Invalid punch sequence: {0}")]
    Validation(String),

    #[error("A '{kind}' punch already exists for {date} (use --edit to replace it)")]
    DuplicatePunch { date: String, kind: String },

    #[error("No record found for date {0}")]
    NoRecordForDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration YAML: {0}")]
    ConfigLoad(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
