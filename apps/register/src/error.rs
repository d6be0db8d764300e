//! # API Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Register                           │
//! │                                                                         │
//! │  Operator                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  sell Hat 5 30.00                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad number? ─── ValidationError ──────────────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Rule broken? ─── CoreError::InsufficientFunds ── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  error: Total cost is $38.00. Please collect more cash.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` serializes with both a machine-readable `code` and the
//! human-readable `message`, so `--json` consumers can branch on the code.

use std::io;

use serde::Serialize;
use thiserror::Error;
use till_core::{CoreError, ReportError, ValidationError};

/// Error returned from register commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "OUT_OF_STOCK",
///   "message": "Only 30 left in stock."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No item with that name
    NotFound,

    /// Malformed or out-of-range input
    ValidationError,

    /// Cash tendered does not cover the total
    InsufficientFunds,

    /// Not enough units on hand
    OutOfStock,

    /// Report could not be written
    ExportError,

    /// The shell did not understand the line
    UnknownCommand,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown-command error.
    pub fn unknown_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to the notices the operator sees.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(_) => {
                ApiError::new(ErrorCode::NotFound, "Please select a valid item.")
            }
            CoreError::InsufficientFunds { required, .. } => ApiError::new(
                ErrorCode::InsufficientFunds,
                format!("Total cost is {}. Please collect more cash.", required),
            ),
            CoreError::OutOfStock { available, .. } => ApiError::new(
                ErrorCode::OutOfStock,
                format!("Only {} left in stock.", available),
            ),
            err @ CoreError::NegativeStock { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts export failures to API errors.
impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::NoDestination => {
                ApiError::new(ErrorCode::ExportError, "No export destination selected.")
            }
            ReportError::Io(e) => {
                tracing::error!("Report export failed: {}", e);
                ApiError::new(ErrorCode::ExportError, format!("Could not save report: {}", e))
            }
            ReportError::Csv(e) => {
                tracing::error!("Report encoding failed: {}", e);
                ApiError::new(ErrorCode::ExportError, format!("Could not save report: {}", e))
            }
        }
    }
}

/// Errors that end a shell dispatch.
///
/// `Api` is reported to the operator and the shell keeps going; the other
/// two mean the output stream itself is gone.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not write output: {0}")]
    Output(#[from] io::Error),

    #[error("could not render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
