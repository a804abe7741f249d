//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (pricing / fraud inside a store session)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds credential and integrity failures     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in shop-cli) ← code + class + message                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `InvalidCredentials` and `Core` are caused by the caller. Everything else
//! is a programming or environment error and never a user-input problem.

use shop_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Email exists but the supplied password does not match.
    #[error("Invalid credentials for {email}")]
    InvalidCredentials { email: String },

    /// A previous holder of the store lock panicked.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// The id sequence for an entity ran out.
    #[error("{entity} id sequence exhausted")]
    IdExhausted { entity: &'static str },

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Hasher parameters were rejected.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// A business rule rejected the request mid-session.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// True for failures the caller caused (as opposed to internal faults).
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidCredentials { .. } | StoreError::Core(_)
        )
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
