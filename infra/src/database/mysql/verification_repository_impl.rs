//! MySQL implementation of the VerificationRepository trait.
//!
//! Persists verification records in the `email_verifications` table with the
//! token as primary key. The pending-to-verified transition is a single
//! conditional UPDATE, so concurrent verification attempts for the same token
//! cannot both win.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;

use ev_core::domain::entities::verification::{EmailVerification, VerificationStatus};
use ev_core::errors::DomainError;
use ev_core::repositories::VerificationRepository;

/// MySQL implementation of VerificationRepository
pub struct MySqlVerificationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    /// Create a new MySQL verification repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn store_error(operation: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::StoreUnavailable {
            operation: operation.to_string(),
            message: e.to_string(),
        }
    }

    /// Convert a database row to an EmailVerification entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<EmailVerification, DomainError> {
        let status: String = row
            .try_get("status")
            .map_err(|e| Self::store_error("find_by_token", e))?;

        Ok(EmailVerification {
            token: row
                .try_get("token")
                .map_err(|e| Self::store_error("find_by_token", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::store_error("find_by_token", e))?,
            status: VerificationStatus::from_str(&status)
                .map_err(|e| Self::store_error("find_by_token", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::store_error("find_by_token", e))?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn save(&self, record: EmailVerification) -> Result<EmailVerification, DomainError> {
        // Insert-or-overwrite: put semantics keyed on the token
        let query = r#"
            INSERT INTO email_verifications (token, email, status, created_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                email = VALUES(email),
                status = VALUES(status),
                created_at = VALUES(created_at)
        "#;

        sqlx::query(query)
            .bind(&record.token)
            .bind(&record.email)
            .bind(record.status.as_str())
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(token = %record.token, error = %e, "Failed to save verification record");
                Self::store_error("save", e)
            })?;

        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<EmailVerification>, DomainError> {
        let query = r#"
            SELECT token, email, status, created_at
            FROM email_verifications
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(token = token, error = %e, "Failed to load verification record");
                Self::store_error("find_by_token", e)
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_verified(&self, token: &str) -> Result<bool, DomainError> {
        // Conditional update: only a currently pending row transitions
        let query = r#"
            UPDATE email_verifications
            SET status = 'verified'
            WHERE token = ? AND status = 'pending'
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(token = token, error = %e, "Failed to mark verification record verified");
                Self::store_error("mark_verified", e)
            })?;

        Ok(result.rows_affected() == 1)
    }
}
