//! End-to-end lifecycle tests for the verification core
//!
//! Drives the public crate API the way the transport layer does: submit an
//! address, follow the issued token, observe the outcome.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use ev_core::domain::entities::verification::VerificationStatus;
use ev_core::repositories::verification::{MockVerificationRepository, VerificationRepository};
use ev_core::services::verification::{
    EmailSendError, EmailSenderTrait, VerificationOutcome, VerificationService,
    VerificationServiceConfig,
};

/// Sender that captures outbound messages for inspection
struct CapturingSender {
    messages: RwLock<Vec<(String, String)>>,
}

impl CapturingSender {
    fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmailSenderTrait for CapturingSender {
    async fn send_verification_email(
        &self,
        email: &str,
        verification_url: &str,
    ) -> Result<String, EmailSendError> {
        self.messages
            .write()
            .await
            .push((email.to_string(), verification_url.to_string()));
        Ok("integration-message-id".to_string())
    }
}

fn build_service(
    repo: Arc<MockVerificationRepository>,
    sender: Arc<CapturingSender>,
) -> VerificationService<MockVerificationRepository, CapturingSender> {
    let config = VerificationServiceConfig {
        token_validity_minutes: 60,
        base_url: Some("https://app.example.com".to_string()),
        verify_path: "/api/v1/verification/verify".to_string(),
    };
    VerificationService::new(repo, sender, config)
}

#[tokio::test]
async fn full_lifecycle_submit_verify_reverify() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(CapturingSender::new());
    let service = build_service(repo.clone(), sender.clone());

    // Submit
    let result = service
        .submit_email("person@example.org", "http://ignored.local")
        .await
        .unwrap();
    assert_eq!(result.message_id, "integration-message-id");

    // The emailed link embeds the issued token under the configured base URL
    let messages = sender.messages.read().await.clone();
    assert_eq!(messages.len(), 1);
    let (recipient, url) = &messages[0];
    assert_eq!(recipient, "person@example.org");
    assert!(url.starts_with("https://app.example.com/api/v1/verification/verify/"));
    assert!(url.ends_with(&result.verification.token));

    // The record is pending until the link is followed
    let stored = repo
        .find_by_token(&result.verification.token)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, VerificationStatus::Pending);

    // First verification succeeds
    let outcome = service.verify_token(&result.verification.token).await.unwrap();
    assert_eq!(
        outcome,
        VerificationOutcome::Success {
            email: "person@example.org".to_string()
        }
    );

    // Replaying the link is idempotent
    let outcome = service.verify_token(&result.verification.token).await.unwrap();
    assert_eq!(
        outcome,
        VerificationOutcome::AlreadyVerified {
            email: "person@example.org".to_string()
        }
    );

    // Unknown tokens stay invalid regardless
    let outcome = service.verify_token("0000000000000000").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::InvalidToken);
}

#[tokio::test]
async fn concurrent_verification_attempts_converge() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(CapturingSender::new());
    let service = Arc::new(build_service(repo.clone(), sender));

    let result = service
        .submit_email("person@example.org", "http://ignored.local")
        .await
        .unwrap();
    let token = result.verification.token;

    // Fire several verification attempts for the same token at once
    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let token = token.clone();
        handles.push(tokio::spawn(
            async move { service.verify_token(&token).await },
        ));
    }

    let mut successes = 0;
    let mut already = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            VerificationOutcome::Success { .. } => successes += 1,
            VerificationOutcome::AlreadyVerified { .. } => already += 1,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    // Exactly one attempt wins the pending -> verified transition
    assert_eq!(successes, 1);
    assert_eq!(already, 7);

    let stored = repo.find_by_token(&token).await.unwrap().unwrap();
    assert!(stored.is_verified());
}
