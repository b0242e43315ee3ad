//! Verification repository trait defining the interface for record persistence.

use async_trait::async_trait;

use crate::domain::entities::verification::EmailVerification;
use crate::errors::DomainError;

/// Repository trait for EmailVerification entity persistence operations
///
/// This trait defines the durable mapping from token to verification record.
/// Implementations must make writes durable before returning success and must
/// surface storage failures as `DomainError::StoreUnavailable`, never as a
/// silent success.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Save a verification record, inserting or fully overwriting the record
    /// stored at `record.token`
    ///
    /// Tokens carry enough entropy that key collisions are not defended
    /// against beyond the primary key itself.
    ///
    /// # Arguments
    /// * `record` - The EmailVerification entity to persist
    ///
    /// # Returns
    /// * `Ok(EmailVerification)` - The persisted record
    /// * `Err(DomainError::StoreUnavailable)` - The write could not be made durable
    async fn save(&self, record: EmailVerification) -> Result<EmailVerification, DomainError>;

    /// Point lookup by token
    ///
    /// Absence is a valid "unknown token" outcome, not an error.
    ///
    /// # Arguments
    /// * `token` - The token to look up
    ///
    /// # Returns
    /// * `Ok(Some(EmailVerification))` - Record found
    /// * `Ok(None)` - No record stored under this token
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be reached
    async fn find_by_token(&self, token: &str) -> Result<Option<EmailVerification>, DomainError>;

    /// Atomically transition a record from pending to verified
    ///
    /// The update applies only where the stored status is currently pending,
    /// which closes the read-modify-write race between concurrent
    /// verification attempts for the same token.
    ///
    /// # Arguments
    /// * `token` - The token whose record should transition
    ///
    /// # Returns
    /// * `Ok(true)` - The record transitioned pending -> verified
    /// * `Ok(false)` - No pending record under this token (absent, or a
    ///   concurrent attempt already verified it)
    /// * `Err(DomainError::StoreUnavailable)` - The update could not be applied
    async fn mark_verified(&self, token: &str) -> Result<bool, DomainError>;

    /// Check whether any record exists for a token
    ///
    /// # Arguments
    /// * `token` - The token to check
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether a record is stored under this token
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be reached
    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_token(token).await?.is_some())
    }
}
