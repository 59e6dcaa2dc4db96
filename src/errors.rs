//! Unified application error type.
//! Workflow steps return their own narrow error (validation, precondition,
//! dispatch); everything above them (cli, export, config) returns AppError
//! so the error handling stays consistent and easy to manage.

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// A candidate file was rejected by the intake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported file type: '{0}' (expected .csv, .xls or .xlsx)")]
    UnsupportedExtension(String),
}

/// A submission was blocked before contacting the server.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("No timesheet file selected")]
    NoFile,

    #[error("An employee ID is required for employee reports")]
    MissingEmployeeId,
}

/// The single network exchange with the report service failed.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Report service returned HTTP {0}")]
    ServerError(u16),

    #[error("Report service unreachable: {message}")]
    Unreachable {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl DispatchError {
    /// Wrap a transport or decoding failure, keeping the cause for logging.
    pub fn unreachable<E>(cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let source = cause.into();
        DispatchError::Unreachable {
            message: source.to_string(),
            source,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            DispatchError::ServerError(code) => Some(*code),
            DispatchError::Unreachable { .. } => None,
        }
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
    // Workflow
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("A report submission is already in progress")]
    SubmissionInProgress,

    #[error("Report not generated: {0}")]
    GenerationFailed(String),

    // ---------------------------
    // HTTP client
    // ---------------------------
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

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
