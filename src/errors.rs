//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so that command
//! handlers can propagate with `?` and `main` prints a single message.

use std::io;
use thiserror::Error;

/// The one failure kind the attendance recorder knows about: the upsert
/// did not go through (I/O, SQLite, constraint, anything).
///
/// It is returned as a value by `AttendanceStore` and recovered locally by
/// rolling back the optimistic decision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to save attendance: {reason}")]
pub struct PersistenceFailure {
    pub reason: String,
}

impl PersistenceFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<rusqlite::Error> for PersistenceFailure {
    fn from(e: rusqlite::Error) -> Self {
        Self::new(e.to_string())
    }
}

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

    #[error(transparent)]
    Persistence(#[from] PersistenceFailure),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid attendance status: {0} (expected present|absent)")]
    InvalidStatus(String),

    #[error("Invalid role: {0} (expected admin|leader|member)")]
    InvalidRole(String),

    // ---------------------------
    // Lookup / permission errors
    // ---------------------------
    #[error("No active member with id {0}")]
    MemberNotFound(i64),

    #[error("No event with id {0}")]
    EventNotFound(i64),

    #[error("Permission denied: {user} ({role}) cannot {action}")]
    PermissionDenied {
        user: String,
        role: String,
        action: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
