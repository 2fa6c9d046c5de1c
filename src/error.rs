//! Core error types
//!
//! Every fallible catalog, aggregation and log operation returns `CoreResult`.

use thiserror::Error;

/// Errors raised by the carbohydrate engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("A meal needs at least one item")]
    EmptyMeal,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CoreError::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CoreError::NotFound(msg.into())
    }

    /// True for errors caused by bad caller input (as opposed to missing data)
    pub fn is_caller_error(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_) | CoreError::EmptyMeal)
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
