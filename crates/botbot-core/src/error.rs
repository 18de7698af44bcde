//! Error types for botbot operations.
//!
//! Parse misses and lookup misses are not errors: they are ordinary values
//! that the dispatcher turns into replies. What remains here are the faults
//! of the environment (storage, configuration, IO).

use thiserror::Error;

/// Result type alias for botbot operations.
pub type BotBotResult<T> = Result<T, BotBotError>;

/// Main error type for all botbot operations.
#[derive(Error, Debug)]
pub enum BotBotError {
    /// Database operation failed.
    #[error("Database error: {message}")]
    Database {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Database (DB_xxx)
    DbConnectionFailed,
    DbOperationFailed,
    DbLockPoisoned,

    // Configuration (CFG_xxx)
    CfgInvalid,

    // Filesystem and other environment faults
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DbConnectionFailed => "DB_001",
            ErrorCode::DbOperationFailed => "DB_002",
            ErrorCode::DbLockPoisoned => "DB_003",
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl BotBotError {
    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            code: ErrorCode::DbOperationFailed,
            source: None,
        }
    }

    /// Create a database connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            code: ErrorCode::DbConnectionFailed,
            source: None,
        }
    }

    /// The connection mutex was poisoned by a panicking holder.
    pub fn lock_poisoned() -> Self {
        Self::Database {
            message: "directory connection lock poisoned".to_string(),
            code: ErrorCode::DbLockPoisoned,
            source: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Database { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Io(_) => ErrorCode::Internal,
        }
    }
}

impl From<rusqlite::Error> for BotBotError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database {
            message: err.to_string(),
            code: ErrorCode::DbOperationFailed,
            source: Some(Box::new(err)),
        }
    }
}
