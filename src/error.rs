//! Error types for loan evaluation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GapError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    /// A negative or non-finite APR. Zero APR is valid and uses equal principal payments.
    #[error("Undefined rate: APR {0} has no amortization schedule")]
    UndefinedRate(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GapError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        GapError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type GapResult<T> = Result<T, GapError>;
