//! # API Error Type
//!
//! Unified error type for the request handler.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shop                               │
//! │                                                                         │
//! │  purchase(request)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Validation? ─── ValidationError ─────────── VALIDATION_ERROR ──►│  │
//! │  │         │                                    (client_error)      │  │
//! │  │         ▼                                                        │  │
//! │  │  Password mismatch? ─ StoreError::InvalidCredentials             │  │
//! │  │         │                              ── INVALID_CREDENTIALS ──►│  │
//! │  │         │                                 (access_denied)        │  │
//! │  │         ▼                                                        │  │
//! │  │  Fraud? ─── CoreError::LimitExceeded ─────── LIMIT_EXCEEDED ────►│  │
//! │  │         │                                    (access_denied)     │  │
//! │  │         ▼                                                        │  │
//! │  │  Poisoned lock, hashing, ids ──────────────── INTERNAL ─────────►│  │
//! │  │         │                        (logged, generic message)       │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────── Receipt ──►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shop_core::{CoreError, ValidationError};
use shop_store::StoreError;

/// Error returned from request handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "LIMIT_EXCEEDED",
///   "class": "access_denied",
///   "message": "Limit exceeded"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Broad category the caller can branch on
    pub class: ErrorClass,

    /// Human-readable message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Fraud guard refused the payment (403)
    LimitExceeded,

    /// Existing account, wrong password (401)
    InvalidCredentials,

    /// Internal error (500)
    Internal,
}

impl ErrorCode {
    pub fn class(self) -> ErrorClass {
        match self {
            ErrorCode::ValidationError => ErrorClass::ClientError,
            ErrorCode::LimitExceeded | ErrorCode::InvalidCredentials => ErrorClass::AccessDenied,
            ErrorCode::Internal => ErrorClass::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    ClientError,
    AccessDenied,
    Internal,
}

impl ApiError {
    /// Creates a new API error; the class follows from the code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            class: code.class(),
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Request body that could not be decoded at all.
    pub fn malformed(err: &serde_json::Error) -> Self {
        ApiError::validation(format!("Malformed request: {}", err))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LimitExceeded { .. } => {
                ApiError::new(ErrorCode::LimitExceeded, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => e.into(),
            StoreError::InvalidCredentials { .. } => {
                ApiError::new(ErrorCode::InvalidCredentials, "Invalid credentials")
            }
            StoreError::LockPoisoned => {
                tracing::error!("Store lock poisoned");
                ApiError::internal("Internal error")
            }
            StoreError::IdExhausted { entity } => {
                tracing::error!(entity, "Id sequence exhausted");
                ApiError::internal("Internal error")
            }
            StoreError::PasswordHash(e) => {
                tracing::error!("Password hashing failed: {}", e);
                ApiError::internal("Internal error")
            }
            StoreError::InvalidConfig(e) => {
                tracing::error!("Invalid store configuration: {}", e);
                ApiError::internal("Internal error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::Money;

    #[test]
    fn test_validation_maps_to_client_error() {
        let err: ApiError = ValidationError::PasswordTooShort { min: 8 }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.class, ErrorClass::ClientError);
        assert_eq!(err.message, "Password too short");
    }

    #[test]
    fn test_limit_exceeded() {
        let err: ApiError = CoreError::LimitExceeded {
            total: Money::from_major(6000),
            limit: Money::from_major(5000),
        }
        .into();
        assert_eq!(err.code, ErrorCode::LimitExceeded);
        assert_eq!(err.class, ErrorClass::AccessDenied);
        assert_eq!(err.message, "Limit exceeded");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "LIMIT_EXCEEDED",
                "class": "access_denied",
                "message": "Limit exceeded"
            })
        );
    }

    #[test]
    fn test_credentials_hide_email() {
        let err: ApiError = StoreError::InvalidCredentials {
            email: "x@test.com".to_string(),
        }
        .into();
        assert_eq!(err.class, ErrorClass::AccessDenied);
        assert!(!err.message.contains("x@test.com"));
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let err: ApiError = StoreError::PasswordHash("salt broke".to_string()).into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(err.class, ErrorClass::Internal);
        assert_eq!(err.message, "Internal error");
    }

    #[test]
    fn test_json_shape() {
        let err = ApiError::validation("Invalid email");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "VALIDATION_ERROR",
                "class": "client_error",
                "message": "Invalid email"
            })
        );
    }
}
