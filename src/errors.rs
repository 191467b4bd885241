//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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

    #[error("Corrupt value for key '{key}': {value}")]
    CorruptValue { key: String, value: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid time zone '{0}' (expected 'local' or 'utc')")]
    InvalidTimeZone(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("No meals left to swipe")]
    NoMealsLeft,

    #[error("Insufficient munch money: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: String, requested: String },

    #[error("No {ledger} row with id {id}")]
    RowNotFound { ledger: &'static str, id: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
