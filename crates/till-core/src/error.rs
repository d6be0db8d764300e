//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  ├── ValidationError  - Malformed input (the InvalidArgument kind)     │
//! │  └── ReportError      - Report could not be written                    │
//! │                                                                         │
//! │  register app errors                                                   │
//! │  └── ApiError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Operator               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation either applies completely or returns one of these with
//! the session untouched.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog item has this name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Cash handed over does not cover the sale total.
    ///
    /// ## User Workflow
    /// ```text
    /// sell Hat 5 30.00
    ///      │
    ///      ▼
    /// total = $7.60 × 5 = $38.00 > $30.00
    ///      │
    ///      ▼
    /// InsufficientFunds { required: $38.00, tendered: $30.00 }
    ///      │
    ///      ▼
    /// UI shows: "Total cost is $38.00. Please collect more cash."
    /// ```
    #[error("Insufficient funds: total is {required}, tendered {tendered}")]
    InsufficientFunds { required: Money, tendered: Money },

    /// Not enough units on hand to complete the sale.
    #[error("Out of stock for {item}: available {available}, requested {requested}")]
    OutOfStock {
        item: String,
        available: i64,
        requested: i64,
    },

    /// A stock adjustment would take the item below zero.
    #[error("Stock for {item} cannot go negative: current {stock}, adjustment {delta}")]
    NegativeStock { item: String, stock: i64, delta: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for malformed input (negative price or stock, non-positive
    /// quantity, unparseable numbers, empty names).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when an input value is malformed, before any business rule
/// runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. "abc" where a price was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Report Error
// =============================================================================

/// Failures while writing the sales report to its destination.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No destination was chosen.
    #[error("No export destination selected")]
    NoDestination,

    /// The destination could not be opened or written.
    #[error("Could not write report: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("Could not encode report: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
