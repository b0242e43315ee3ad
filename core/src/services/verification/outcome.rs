//! Verification state machine
//!
//! A pure decision function over the stored record and the current time.
//! The service layer performs the single store write a `Success` decision
//! calls for; everything here is side-effect free.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::verification::EmailVerification;

/// Outcome of a verification attempt
///
/// A closed set consumed by the transport layer for presentation. None of
/// these are failures of the system; internal errors travel separately as
/// `DomainError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The token was pending and inside its validity window; the record
    /// transitions to verified
    Success { email: String },
    /// The token had already been used successfully
    AlreadyVerified { email: String },
    /// The token exists but its validity window has elapsed
    Expired { email: String },
    /// No record exists for the presented token
    InvalidToken,
}

impl VerificationOutcome {
    /// Stable string identifier for API payloads
    pub fn status_str(&self) -> &'static str {
        match self {
            VerificationOutcome::Success { .. } => "success",
            VerificationOutcome::AlreadyVerified { .. } => "already_verified",
            VerificationOutcome::Expired { .. } => "expired",
            VerificationOutcome::InvalidToken => "invalid_token",
        }
    }

    /// The email associated with the outcome, when known
    pub fn email(&self) -> Option<&str> {
        match self {
            VerificationOutcome::Success { email }
            | VerificationOutcome::AlreadyVerified { email }
            | VerificationOutcome::Expired { email } => Some(email),
            VerificationOutcome::InvalidToken => None,
        }
    }

    /// Whether this outcome marks the attempt that verified the email
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Success { .. })
    }
}

/// Decide the outcome of a verification attempt
///
/// Transition table:
///
/// * absent record -> `InvalidToken`
/// * verified record -> `AlreadyVerified`
/// * pending record past `created_at + window` -> `Expired`
/// * pending record within the window -> `Success`
///
/// The boundary instant `created_at + window` is still honored. Only a
/// `Success` decision calls for a store mutation, performed by the caller
/// as an atomic pending-to-verified transition.
///
/// # Arguments
///
/// * `record` - The stored record, or `None` for an unknown token
/// * `now` - The instant of the attempt
/// * `window` - The configured validity window
pub fn evaluate(
    record: Option<&EmailVerification>,
    now: DateTime<Utc>,
    window: Duration,
) -> VerificationOutcome {
    let Some(record) = record else {
        return VerificationOutcome::InvalidToken;
    };

    if record.is_verified() {
        return VerificationOutcome::AlreadyVerified {
            email: record.email.clone(),
        };
    }

    if record.is_expired(window, now) {
        return VerificationOutcome::Expired {
            email: record.email.clone(),
        };
    }

    VerificationOutcome::Success {
        email: record.email.clone(),
    }
}
