//! Mock email sender for verification service tests

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::verification::traits::{EmailSendError, EmailSenderTrait};

/// Recording email sender with configurable failure
pub struct MockEmailSender {
    sent: Arc<RwLock<Vec<(String, String)>>>,
    failure: RwLock<Option<EmailSendError>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            failure: RwLock::new(None),
        }
    }

    /// Make every subsequent send fail with the given error
    pub async fn fail_with(&self, error: EmailSendError) {
        *self.failure.write().await = Some(error);
    }

    /// Messages dispatched so far, as (email, verification_url) pairs
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.read().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl EmailSenderTrait for MockEmailSender {
    async fn send_verification_email(
        &self,
        email: &str,
        verification_url: &str,
    ) -> Result<String, EmailSendError> {
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }

        let mut sent = self.sent.write().await;
        sent.push((email.to_string(), verification_url.to_string()));
        Ok(format!("mock-message-{}", sent.len()))
    }
}
