//! In-memory implementation of VerificationRepository
//!
//! Used by tests and by development wiring when no database is available.
//! Supports failure injection so callers can exercise the store-unavailable
//! paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification::{EmailVerification, VerificationStatus};
use crate::errors::DomainError;

use super::r#trait::VerificationRepository;

/// In-memory verification repository backed by a HashMap
pub struct MockVerificationRepository {
    records: Arc<RwLock<HashMap<String, EmailVerification>>>,
    unavailable: AtomicBool,
}

impl MockVerificationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate the underlying store being unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of records currently stored
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self, operation: &str) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                operation: operation.to_string(),
                message: "simulated store outage".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockVerificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn save(&self, record: EmailVerification) -> Result<EmailVerification, DomainError> {
        self.check_available("save")?;

        let mut records = self.records.write().await;
        records.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<EmailVerification>, DomainError> {
        self.check_available("find_by_token")?;

        let records = self.records.read().await;
        Ok(records.get(token).cloned())
    }

    async fn mark_verified(&self, token: &str) -> Result<bool, DomainError> {
        self.check_available("mark_verified")?;

        let mut records = self.records.write().await;
        match records.get_mut(token) {
            Some(record) if record.status == VerificationStatus::Pending => {
                record.mark_verified();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
