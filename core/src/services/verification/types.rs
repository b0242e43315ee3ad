//! Types for verification service results

use crate::domain::entities::verification::EmailVerification;

/// Result of a successful email submission
#[derive(Debug, Clone)]
pub struct SubmitResult {
    /// The pending record that was persisted
    pub verification: EmailVerification,
    /// The provider message ID from the sender
    pub message_id: String,
    /// The verification link embedded in the message
    pub verification_url: String,
}
