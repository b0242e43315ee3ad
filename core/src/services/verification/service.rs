//! Main verification service implementation

use chrono::Utc;
use std::sync::Arc;

use ev_shared::utils::validation::{is_valid_email, mask_email};

use crate::domain::entities::verification::EmailVerification;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::verification::VerificationRepository;

use super::config::VerificationServiceConfig;
use super::outcome::{evaluate, VerificationOutcome};
use super::traits::EmailSenderTrait;
use super::types::SubmitResult;

/// Verification service driving the token lifecycle
///
/// Owns the two workflows of the system: issuing a pending record plus
/// verification email, and deciding the outcome of a verification attempt.
pub struct VerificationService<R: VerificationRepository, E: EmailSenderTrait> {
    /// Durable token store
    repository: Arc<R>,
    /// Outbound email boundary
    email_sender: Arc<E>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<R: VerificationRepository, E: EmailSenderTrait> VerificationService<R, E> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `repository` - Verification record store
    /// * `email_sender` - Email sender implementation
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, email_sender: Arc<E>, config: VerificationServiceConfig) -> Self {
        Self {
            repository,
            email_sender,
            config,
        }
    }

    /// Submit an email address for verification
    ///
    /// This method:
    /// 1. Validates the address shape
    /// 2. Mints a fresh 128-bit token
    /// 3. Persists a pending record
    /// 4. Builds the verification link
    /// 5. Dispatches the verification email
    ///
    /// A store failure aborts before any send, so a link is never issued for
    /// an unpersisted token. A send failure after the record was persisted
    /// surfaces as `DomainError::EmailDelivery` and leaves the pending record
    /// in place; it simply becomes unreachable by the user.
    ///
    /// # Arguments
    ///
    /// * `email` - The address to verify
    /// * `fallback_base_url` - Scheme and host of the inbound request, used
    ///   when no base URL is configured
    ///
    /// # Returns
    ///
    /// * `Ok(SubmitResult)` - The persisted record, message ID, and link
    /// * `Err(DomainError)` - Validation, store, or delivery failure
    pub async fn submit_email(
        &self,
        email: &str,
        fallback_base_url: &str,
    ) -> DomainResult<SubmitResult> {
        let email = email.trim();
        if !is_valid_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "submit_rejected",
                "Rejected syntactically invalid email address"
            );
            return Err(ValidationError::InvalidEmail {
                email: email.to_string(),
            }
            .into());
        }

        let verification = EmailVerification::new(email);

        tracing::info!(
            email = %mask_email(email),
            token = %verification.token,
            event = "token_minted",
            "Minted verification token"
        );

        let verification = self.repository.save(verification).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(email),
                error = %e,
                event = "record_persist_failed",
                "Failed to persist pending verification record"
            );
            e
        })?;

        let verification_url = self.build_verification_url(&verification.token, fallback_base_url);

        let message_id = self
            .email_sender
            .send_verification_email(email, &verification_url)
            .await
            .map_err(|e| {
                // The pending record stays behind; there is no compensating delete
                tracing::error!(
                    email = %mask_email(email),
                    token = %verification.token,
                    retryable = e.retryable,
                    error = %e,
                    event = "email_dispatch_failed",
                    "Failed to dispatch verification email"
                );
                DomainError::EmailDelivery {
                    email: email.to_string(),
                    retryable: e.retryable,
                    message: e.message,
                }
            })?;

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            event = "verification_email_sent",
            "Verification email dispatched"
        );

        Ok(SubmitResult {
            verification,
            message_id,
            verification_url,
        })
    }

    /// Decide the outcome of a verification attempt
    ///
    /// Reads the record, runs the pure state machine against the current
    /// time, and applies the single conditional write a success calls for.
    /// If a concurrent attempt wins the pending-to-verified transition, this
    /// call degrades to `AlreadyVerified` - the converged end state.
    ///
    /// # Arguments
    ///
    /// * `token` - The presented verification token
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationOutcome)` - One of the four expected outcomes
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be reached
    pub async fn verify_token(&self, token: &str) -> DomainResult<VerificationOutcome> {
        let record = self.repository.find_by_token(token).await?;

        let outcome = evaluate(record.as_ref(), Utc::now(), self.config.window());

        let outcome = match outcome {
            VerificationOutcome::Success { email } => {
                if self.repository.mark_verified(token).await? {
                    VerificationOutcome::Success { email }
                } else {
                    // Lost the race against a concurrent attempt
                    VerificationOutcome::AlreadyVerified { email }
                }
            }
            other => other,
        };

        tracing::info!(
            token = token,
            outcome = outcome.status_str(),
            event = "verification_attempt",
            "Processed verification attempt"
        );

        Ok(outcome)
    }

    /// Build the absolute verification URL for a token
    ///
    /// Uses the configured base URL when present, otherwise the scheme and
    /// host of the inbound request supplied by the transport layer.
    fn build_verification_url(&self, token: &str, fallback_base_url: &str) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(fallback_base_url)
            .trim_end_matches('/');

        format!("{}{}/{}", base, self.config.verify_path, token)
    }
}
