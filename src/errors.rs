//! Unified application error type.
//! Every module (db, query, stats, cli) returns AppError so that errors
//! coming from SQLite, the filesystem and the parsers travel the same way.

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

    #[error("Statement does not return a result set: {0}")]
    NoResultSet(String),

    #[error("Incompatible schema: {0}")]
    Schema(String),

    #[error("Cannot convert value in column '{column}': {reason}")]
    TypeConversion { column: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    // ---------------------------
    // Import / config errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
