//! DTOs for the verification endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use ev_core::services::VerificationOutcome;

/// Request body for POST /api/v1/verification/submit
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitEmailRequest {
    /// Email address to send a verification link to
    #[validate(
        email(message = "Invalid email address format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,
}

/// Response body for a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitEmailResponse {
    /// Human-readable confirmation
    pub message: String,
    /// The minted verification token
    pub token: String,
}

/// Response body for GET /api/v1/verification/verify/{token}
///
/// All four outcomes are reported with HTTP 200; `status` carries the
/// machine-readable result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// One of `success`, `already_verified`, `expired`, `invalid_token`
    pub status: String,
    /// Verified address, absent when the token is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Human-readable description of the outcome
    pub message: String,
}

impl VerifyResponse {
    /// Build the response body for a verification outcome
    pub fn from_outcome(outcome: &VerificationOutcome) -> Self {
        let message = match outcome {
            VerificationOutcome::Success { .. } => {
                "Email verified successfully. Thank you!".to_string()
            }
            VerificationOutcome::AlreadyVerified { .. } => {
                "This email address has already been verified.".to_string()
            }
            VerificationOutcome::Expired { .. } => {
                "This verification link has expired. Please submit your email again.".to_string()
            }
            VerificationOutcome::InvalidToken => {
                "Invalid verification link.".to_string()
            }
        };

        Self {
            status: outcome.status_str().to_string(),
            email: outcome.email().map(|e| e.to_string()),
            message,
        }
    }
}
