//! Domain-specific error types for the verification workflows
//!
//! Invalid, expired, and already-verified tokens are NOT errors; those are
//! expected outcomes of the verification state machine and live in
//! [`crate::services::verification::VerificationOutcome`]. The types here
//! cover genuine failures: bad input and unavailable collaborators.

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("Required field: {field}")]
    RequiredField { field: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed client input; no side effects have occurred
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The verification store is unreachable or failing.
    /// Retryable by the caller; the core attempts each operation once.
    #[error("Verification store unavailable during {operation}: {message}")]
    StoreUnavailable { operation: String, message: String },

    /// Outbound notification dispatch failed after the record was persisted.
    /// The pending record is not rolled back.
    #[error("Failed to deliver verification email to {email}: {message}")]
    EmailDelivery {
        email: String,
        retryable: bool,
        message: String,
    },
}

impl DomainError {
    /// Stable string code for API payloads and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation(ValidationError::InvalidEmail { .. }) => "INVALID_EMAIL",
            DomainError::Validation(ValidationError::RequiredField { .. }) => "REQUIRED_FIELD",
            DomainError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            DomainError::EmailDelivery { .. } => "EMAIL_DELIVERY_FAILED",
        }
    }

    /// Whether the caller may reasonably retry the same request
    pub fn is_retryable(&self) -> bool {
        match self {
            DomainError::Validation(_) => false,
            DomainError::StoreUnavailable { .. } => true,
            DomainError::EmailDelivery { retryable, .. } => *retryable,
        }
    }
}
