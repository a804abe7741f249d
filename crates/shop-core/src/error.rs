//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule rejections (fraud guard)         │
//! │  └── ValidationError  - Malformed or out-of-range input                │
//! │                                                                         │
//! │  shop-store errors (separate crate)                                    │
//! │  └── StoreError       - Credentials, lock and id failures              │
//! │                                                                         │
//! │  shop-cli errors (in app)                                              │
//! │  └── ApiError         - What the caller sees (code + class + message)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Caller    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are stable: callers match on them ("Password too short")
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The fraud guard rejected the transaction.
    ///
    /// ## When This Occurs
    /// ```text
    /// payment = "card"  AND  total > limit  AND  role = new
    ///      │
    ///      ▼
    /// LimitExceeded { total, limit }  ──►  access-denied response
    /// ```
    #[error("Limit exceeded")]
    LimitExceeded { total: Money, limit: Money },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the request boundary before any user or order is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Password shorter than the configured minimum.
    #[error("Password too short")]
    PasswordTooShort { min: usize },

    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email")]
    InvalidEmail,

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Amount above what the shop accepts (or can represent).
    #[error("{field} exceeds {max}")]
    TooLarge { field: String, max: Money },

    /// Value is not in the closed set of allowed values.
    #[error("{field} '{value}' is not one of: {}", allowed.join(", "))]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Creates a NotAllowed error from a static list of accepted values.
    pub fn not_allowed(field: &str, value: &str, allowed: &[&str]) -> Self {
        ValidationError::NotAllowed {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
