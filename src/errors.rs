//! Error types for the workshop engine
//!
//! Each error type has a corresponding error code for programmatic handling.

use std::fmt;

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TallerError>;

/// A single failed field in a form-like input (intake, payment method).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the offending field (e.g. `bankName`)
    pub field: &'static str,

    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        FieldError {
            field,
            message: format!("{} is required", field),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Main error type for all engine operations
#[derive(Debug, Error)]
pub enum TallerError {
    /// Cost did not parse to a non-negative finite amount
    #[error("Invalid cost: {0}")]
    InvalidCost(String),

    /// Budget item description was blank
    #[error("Budget item description cannot be empty")]
    EmptyDescription,

    /// Exchange rate was not a positive number
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// One or more required fields were missing
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FieldError>),

    /// Diagnosis -> execution attempted without an approved budget
    #[error("Vehicle {0} cannot enter execution without an approved budget")]
    BudgetNotApproved(String),

    /// Vehicle, item, record or payment method not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl TallerError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            TallerError::InvalidCost(_) => "INVALID_COST",
            TallerError::EmptyDescription => "EMPTY_DESCRIPTION",
            TallerError::InvalidRate(_) => "INVALID_RATE",
            TallerError::MissingFields(_) => "MISSING_FIELDS",
            TallerError::BudgetNotApproved(_) => "BUDGET_NOT_APPROVED",
            TallerError::NotFound(_) => "NOT_FOUND",
            TallerError::InvalidJson(_) => "INVALID_JSON",
            TallerError::Io(_) => "IO_ERROR",
            TallerError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Malformed cost, blank required field or non-positive rate
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TallerError::InvalidCost(_)
                | TallerError::EmptyDescription
                | TallerError::InvalidRate(_)
                | TallerError::MissingFields(_)
        )
    }

    /// Field-level errors, empty for anything but `MissingFields`
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            TallerError::MissingFields(errors) => errors,
            _ => &[],
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        TallerError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &TallerError) -> i32 {
    match error {
        e if e.is_invalid_input() => 2,
        TallerError::BudgetNotApproved(_) => 3,
        TallerError::NotFound(_) => 4,
        _ => 1,
    }
}
