//! Unified application error type.
//! All modules (core, ledger, archive, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Ledger store
    // ---------------------------
    #[error("Ledger table error: {0}")]
    Csv(#[from] csv::Error),

    #[error("User '{user}' not found in the {table} table")]
    RowNotFound { table: String, user: String },

    #[error("Unreadable number '{value}' for user '{user}' in the {table} table")]
    MalformedValue {
        table: String,
        user: String,
        value: String,
    },

    #[error("No bank row for user '{0}'")]
    UserNotFound(String),

    // ---------------------------
    // Session lifecycle
    // ---------------------------
    #[error("The check-in session is already closed")]
    SessionClosed,

    #[error("A check-in session is already open")]
    SessionAlreadyOpen,

    // ---------------------------
    // Roster archive
    // ---------------------------
    #[error("Could not write the roster record: {0}")]
    StorageUnavailable(io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
