//! Verification service workflow tests

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::verification::{EmailVerification, VerificationStatus};
use crate::errors::DomainError;
use crate::repositories::verification::{MockVerificationRepository, VerificationRepository};
use crate::services::verification::config::VerificationServiceConfig;
use crate::services::verification::outcome::VerificationOutcome;
use crate::services::verification::service::VerificationService;
use crate::services::verification::traits::EmailSendError;

use super::mocks::MockEmailSender;

const FALLBACK_BASE: &str = "http://localhost:8080";

fn test_config() -> VerificationServiceConfig {
    VerificationServiceConfig {
        token_validity_minutes: 5,
        base_url: None,
        verify_path: "/api/v1/verification/verify".to_string(),
    }
}

fn service(
    repo: Arc<MockVerificationRepository>,
    sender: Arc<MockEmailSender>,
    config: VerificationServiceConfig,
) -> VerificationService<MockVerificationRepository, MockEmailSender> {
    VerificationService::new(repo, sender, config)
}

#[tokio::test]
async fn test_submit_persists_pending_record_and_sends_link() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender.clone(), test_config());

    let result = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap();

    let stored = repo
        .find_by_token(&result.verification.token)
        .await
        .unwrap()
        .expect("pending record must exist immediately after submit");
    assert_eq!(stored.status, VerificationStatus::Pending);
    assert_eq!(stored.email, "user@example.com");

    let sent = sender.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "user@example.com");
    assert_eq!(
        sent[0].1,
        format!(
            "http://localhost:8080/api/v1/verification/verify/{}",
            result.verification.token
        )
    );
    assert_eq!(sent[0].1, result.verification_url);
}

#[tokio::test]
async fn test_submit_issues_fresh_tokens() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender, test_config());

    let first = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap();
    let second = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap();

    assert_ne!(first.verification.token, second.verification.token);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_submit_uses_configured_base_url() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let config = VerificationServiceConfig {
        base_url: Some("https://verify.example.com/".to_string()),
        ..test_config()
    };
    let svc = service(repo, sender.clone(), config);

    let result = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap();

    assert_eq!(
        result.verification_url,
        format!(
            "https://verify.example.com/api/v1/verification/verify/{}",
            result.verification.token
        )
    );
}

#[tokio::test]
async fn test_submit_rejects_invalid_email_with_no_side_effects() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender.clone(), test_config());

    let err = svc.submit_email("not-an-address", FALLBACK_BASE).await.unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert!(repo.is_empty().await);
    assert_eq!(sender.sent_count().await, 0);
}

#[tokio::test]
async fn test_submit_store_failure_aborts_before_send() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender.clone(), test_config());

    repo.set_unavailable(true);
    let err = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap_err();

    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
    assert_eq!(sender.sent_count().await, 0);
}

#[tokio::test]
async fn test_submit_send_failure_leaves_pending_record() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender.clone(), test_config());

    sender.fail_with(EmailSendError::fatal("sender not verified")).await;
    let err = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap_err();

    match err {
        DomainError::EmailDelivery {
            email, retryable, ..
        } => {
            assert_eq!(email, "user@example.com");
            assert!(!retryable);
        }
        other => panic!("expected EmailDelivery error, got {:?}", other),
    }

    // The orphaned pending record is accepted; no compensating delete
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_submit_then_verify_succeeds() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender, test_config());

    let result = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap();
    let outcome = svc.verify_token(&result.verification.token).await.unwrap();

    assert_eq!(
        outcome,
        VerificationOutcome::Success {
            email: "user@example.com".to_string()
        }
    );

    let stored = repo
        .find_by_token(&result.verification.token)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_verified());
}

#[tokio::test]
async fn test_second_verify_reports_already_verified() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo, sender, test_config());

    let result = svc.submit_email("user@example.com", FALLBACK_BASE).await.unwrap();
    let token = result.verification.token;

    let first = svc.verify_token(&token).await.unwrap();
    assert!(first.is_success());

    let second = svc.verify_token(&token).await.unwrap();
    assert_eq!(
        second,
        VerificationOutcome::AlreadyVerified {
            email: "user@example.com".to_string()
        }
    );
}

#[tokio::test]
async fn test_verify_expired_token() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender, test_config());

    // Back-date a pending record past the 5 minute window
    let mut record = EmailVerification::new("user@example.com");
    record.created_at = Utc::now() - Duration::minutes(5) - Duration::seconds(1);
    let token = record.token.clone();
    repo.save(record).await.unwrap();

    let outcome = svc.verify_token(&token).await.unwrap();
    assert_eq!(
        outcome,
        VerificationOutcome::Expired {
            email: "user@example.com".to_string()
        }
    );

    // Expiry is read-only; the record stays pending
    let stored = repo.find_by_token(&token).await.unwrap().unwrap();
    assert!(stored.is_pending());
}

#[tokio::test]
async fn test_verify_unknown_token() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo, sender, test_config());

    let outcome = svc.verify_token("does-not-exist").await.unwrap();
    assert_eq!(outcome, VerificationOutcome::InvalidToken);
}

#[tokio::test]
async fn test_verify_store_failure_surfaces() {
    let repo = Arc::new(MockVerificationRepository::new());
    let sender = Arc::new(MockEmailSender::new());
    let svc = service(repo.clone(), sender, test_config());

    repo.set_unavailable(true);
    let err = svc.verify_token("any").await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}

/// Repository that reads a pending record but always loses the conditional
/// transition, standing in for a concurrent attempt winning the race.
struct RaceLosingRepository {
    inner: MockVerificationRepository,
}

#[async_trait]
impl VerificationRepository for RaceLosingRepository {
    async fn save(&self, record: EmailVerification) -> Result<EmailVerification, DomainError> {
        self.inner.save(record).await
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<EmailVerification>, DomainError> {
        self.inner.find_by_token(token).await
    }

    async fn mark_verified(&self, _token: &str) -> Result<bool, DomainError> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_lost_race_degrades_to_already_verified() {
    let repo = Arc::new(RaceLosingRepository {
        inner: MockVerificationRepository::new(),
    });
    let sender = Arc::new(MockEmailSender::new());
    let svc = VerificationService::new(repo.clone(), sender, test_config());

    let record = EmailVerification::new("user@example.com");
    let token = record.token.clone();
    repo.save(record).await.unwrap();

    let outcome = svc.verify_token(&token).await.unwrap();
    assert_eq!(
        outcome,
        VerificationOutcome::AlreadyVerified {
            email: "user@example.com".to_string()
        }
    );
}
