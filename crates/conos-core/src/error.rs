//! # Error Types
//!
//! Domain-specific error types for conos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  conos-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing pipeline failures (UnknownVariant)     │
//! │  └── ValidationError  - Strict input validation failures               │
//! │                                                                         │
//! │  conos-orders errors (separate crate)                                  │
//! │  └── StoreError       - Order store failures, wraps both of the above  │
//! │                                                                         │
//! │  The pipeline is deliberately hard to fail: unknown toppings and       │
//! │  sizes are normalized, so UnknownVariant is the only error a quote     │
//! │  computation can return.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending value, valid options)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing pipeline errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested variant is outside the closed catalog.
    ///
    /// ## When This Occurs
    /// - Caller passes a variant name with no catalog entry
    /// - This is the sole recoverable error from `quote_order`; an API
    ///   layer should map it to a client error carrying `available`
    #[error("variant '{name}' is not available, valid options: {available:?}")]
    UnknownVariant {
        name: String,
        available: Vec<String>,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for the strict storage boundary.
///
/// The pricing core itself never raises these: it silently drops unknown
/// toppings and defaults unknown sizes. Order storage is stricter and
/// rejects anything outside the catalogs. The two policies are
/// intentionally different and must not be unified.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// A list field contains entries outside the allowed set.
    #[error("{field} contains entries that are not allowed: {rejected:?}")]
    EntriesNotAllowed { field: String, rejected: Vec<String> },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
