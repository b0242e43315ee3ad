//! Sender boundary for outbound verification email

use async_trait::async_trait;

/// Failure reported by an email sender implementation
///
/// Failure kinds are opaque to the core beyond the retryable-vs-fatal
/// classification; provider-specific detail stays in `message`.
#[derive(Debug, Clone)]
pub struct EmailSendError {
    /// Whether the same send may reasonably succeed on retry
    pub retryable: bool,
    /// Provider-facing description of the failure
    pub message: String,
}

impl EmailSendError {
    /// Create a retryable send failure (throttling, transient outage)
    pub fn retryable(message: impl Into<String>) -> Self {
        Self {
            retryable: true,
            message: message.into(),
        }
    }

    /// Create a fatal send failure (rejected sender, unverified domain)
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            retryable: false,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EmailSendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EmailSendError {}

/// Trait for dispatching verification messages
#[async_trait]
pub trait EmailSenderTrait: Send + Sync {
    /// Send a verification message containing the given link
    ///
    /// # Arguments
    ///
    /// * `email` - The recipient address
    /// * `verification_url` - The absolute verification link to embed
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the dispatched message
    /// * `Err(EmailSendError)` - Dispatch failed
    async fn send_verification_email(
        &self,
        email: &str,
        verification_url: &str,
    ) -> Result<String, EmailSendError>;
}
