//! Adapter bridging infrastructure email services to the core sender trait.
//!
//! The core service layer depends on `EmailSenderTrait` and knows nothing
//! about providers. This adapter wraps any `EmailService` implementation and
//! carries the configured validity window so message bodies can name it.

use async_trait::async_trait;
use std::sync::Arc;

use ev_core::services::{EmailSendError, EmailSenderTrait};

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Adapter that implements the core `EmailSenderTrait` over an
/// infrastructure `EmailService`.
pub struct EmailSenderAdapter {
    inner: Arc<dyn EmailService>,
    validity_minutes: i64,
}

impl EmailSenderAdapter {
    /// Create a new adapter
    ///
    /// # Arguments
    ///
    /// * `inner` - The underlying email service
    /// * `validity_minutes` - Token validity window named in message bodies
    pub fn new(inner: Arc<dyn EmailService>, validity_minutes: i64) -> Self {
        Self {
            inner,
            validity_minutes,
        }
    }

    /// The provider name of the wrapped service
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    fn map_error(e: InfrastructureError) -> EmailSendError {
        match e {
            InfrastructureError::Email { message, retryable } => {
                if retryable {
                    EmailSendError::retryable(message)
                } else {
                    EmailSendError::fatal(message)
                }
            }
            other => EmailSendError::fatal(other.to_string()),
        }
    }
}

#[async_trait]
impl EmailSenderTrait for EmailSenderAdapter {
    async fn send_verification_email(
        &self,
        email: &str,
        verification_url: &str,
    ) -> Result<String, EmailSendError> {
        self.inner
            .send_verification_email(email, verification_url, self.validity_minutes)
            .await
            .map_err(Self::map_error)
    }
}
