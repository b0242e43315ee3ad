//! Tests for the in-memory verification repository

use crate::domain::entities::verification::{EmailVerification, VerificationStatus};
use crate::errors::DomainError;
use crate::repositories::verification::{MockVerificationRepository, VerificationRepository};

#[tokio::test]
async fn test_save_and_find_round_trip() {
    let repo = MockVerificationRepository::new();
    let record = EmailVerification::new("user@example.com");
    let token = record.token.clone();

    repo.save(record.clone()).await.unwrap();

    let found = repo.find_by_token(&token).await.unwrap().unwrap();
    assert_eq!(found, record);
    assert_eq!(found.email, "user@example.com");
    assert_eq!(found.created_at, record.created_at);
}

#[tokio::test]
async fn test_find_absent_token_is_none() {
    let repo = MockVerificationRepository::new();

    let result = repo.find_by_token("does-not-exist").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_save_overwrites_existing_record() {
    let repo = MockVerificationRepository::new();
    let mut record = EmailVerification::new("user@example.com");
    let token = record.token.clone();

    repo.save(record.clone()).await.unwrap();

    record.mark_verified();
    repo.save(record).await.unwrap();

    let found = repo.find_by_token(&token).await.unwrap().unwrap();
    assert_eq!(found.status, VerificationStatus::Verified);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_mark_verified_transitions_once() {
    let repo = MockVerificationRepository::new();
    let record = EmailVerification::new("user@example.com");
    let token = record.token.clone();
    repo.save(record).await.unwrap();

    // First transition wins
    assert!(repo.mark_verified(&token).await.unwrap());

    // Second attempt finds no pending record
    assert!(!repo.mark_verified(&token).await.unwrap());

    let found = repo.find_by_token(&token).await.unwrap().unwrap();
    assert!(found.is_verified());
}

#[tokio::test]
async fn test_mark_verified_absent_token() {
    let repo = MockVerificationRepository::new();

    assert!(!repo.mark_verified("does-not-exist").await.unwrap());
}

#[tokio::test]
async fn test_exists_default_method() {
    let repo = MockVerificationRepository::new();
    let record = EmailVerification::new("user@example.com");
    let token = record.token.clone();

    assert!(!repo.exists(&token).await.unwrap());
    repo.save(record).await.unwrap();
    assert!(repo.exists(&token).await.unwrap());
}

#[tokio::test]
async fn test_unavailable_store_surfaces_error() {
    let repo = MockVerificationRepository::new();
    repo.set_unavailable(true);

    let record = EmailVerification::new("user@example.com");
    let err = repo.save(record).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));

    let err = repo.find_by_token("any").await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable { .. }));

    // Recovers once the outage clears
    repo.set_unavailable(false);
    assert!(repo.find_by_token("any").await.unwrap().is_none());
}
