//! Error types for Pennywise
//!
//! `PennywiseError` covers the infrastructure around the books (configuration,
//! files, JSON). Each user-facing operation has its own error enum so callers
//! are forced to handle every validation outcome explicitly.

use thiserror::Error;

/// Infrastructure error for configuration, storage and audit operations
#[derive(Error, Debug)]
pub enum PennywiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for PennywiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PennywiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pennywise infrastructure operations
pub type PennywiseResult<T> = Result<T, PennywiseError>;

/// Why a year/month/day triple was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// One of the parts is not an integer
    #[error("year, month and day must be numbers")]
    InvalidFormat,

    #[error("year must be between 1900 and 2100, got {0}")]
    YearOutOfRange(i32),

    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(i32),

    /// The month exists but does not have that many days
    #[error("month {month} has no day {day}")]
    DayOutOfRange { month: u32, day: i32 },

    #[error("{0} is in the future")]
    FutureDate(chrono::NaiveDate),
}

/// Why a candidate transaction was rejected
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    #[error("a category must be selected")]
    MissingCategory,

    #[error("invalid amount: '{0}'")]
    InvalidAmountFormat(String),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// The transaction was appended to the ledger but could not be written out
    #[error("transaction recorded but not saved: {0}")]
    NotSaved(#[source] PennywiseError),
}

impl TransactionError {
    /// Check if the ledger was changed despite the error
    pub fn is_not_saved(&self) -> bool {
        matches!(self, Self::NotSaved(_))
    }
}

/// Why a new budget amount was rejected
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("invalid budget amount: '{0}'")]
    InvalidAmountFormat(String),

    #[error("budget cannot be negative")]
    NegativeBudget,

    /// The budget was replaced in memory but could not be written out
    #[error("budget updated but not saved: {0}")]
    NotSaved(#[source] PennywiseError),
}

impl BudgetError {
    /// Check if the budget was changed despite the error
    pub fn is_not_saved(&self) -> bool {
        matches!(self, Self::NotSaved(_))
    }
}
