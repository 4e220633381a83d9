//! # Store Error Types

use conos_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors from the order store and service layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No order with the given id.
    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// Rejected by the strict storage validation policy.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Pricing pipeline failure (unknown variant on a quote request).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
