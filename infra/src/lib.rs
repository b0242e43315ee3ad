//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the EmailVerify
//! application. It provides concrete implementations for the verification
//! store and the outbound email boundary defined in `ev_core`.
//!
//! ## Architecture
//!
//! - **Database**: MySQL verification repository using SQLx
//! - **Email**: Email delivery providers (AWS SES, mock)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `aws-ses`: Enable AWS SES email delivery (default)

// Re-export core error types for convenience
pub use ev_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email module - outbound email providers
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services

    use serde::{Deserialize, Serialize};

    /// Email delivery configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct EmailConfig {
        /// Email provider ("aws-ses", "mock")
        pub provider: String,
        /// Verified sender address
        pub sender_email: String,
        /// AWS region for SES
        pub region: String,
    }

    impl Default for EmailConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                sender_email: "noreply@example.com".to_string(),
                region: "us-east-1".to_string(),
            }
        }
    }

    impl EmailConfig {
        /// Create from environment variables
        pub fn from_env() -> Self {
            Self {
                provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
                sender_email: std::env::var("SENDER_EMAIL")
                    .unwrap_or_else(|_| "noreply@example.com".to_string()),
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {message}")]
    Email { message: String, retryable: bool },

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl InfrastructureError {
    /// Whether retrying the same operation may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            InfrastructureError::Database(_) => true,
            InfrastructureError::Config(_) => false,
            InfrastructureError::Email { retryable, .. } => *retryable,
            InfrastructureError::General(_) => false,
        }
    }
}
