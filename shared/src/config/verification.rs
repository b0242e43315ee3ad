//! Verification token configuration module

use serde::{Deserialize, Serialize};

use crate::utils::validation::is_valid_url;

/// Default validity window for verification tokens (24 hours)
pub const DEFAULT_TOKEN_VALIDITY_MINUTES: i64 = 24 * 60;

/// Default path template for verification links
pub const DEFAULT_VERIFY_PATH: &str = "/api/v1/verification/verify";

/// Configuration for the verification token lifecycle
///
/// The validity window is a single tunable parameter; nothing else in the
/// system hardcodes an expiry duration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of minutes a pending token stays honorable
    pub token_validity_minutes: i64,

    /// Absolute base URL used to build verification links.
    /// When absent, the inbound request's scheme and host are used instead.
    pub base_url: Option<String>,

    /// Path prefix of the verification endpoint, appended to the base URL
    /// together with the token
    pub verify_path: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            token_validity_minutes: DEFAULT_TOKEN_VALIDITY_MINUTES,
            base_url: None,
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let token_validity_minutes = std::env::var("TOKEN_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_VALIDITY_MINUTES);
        // A malformed BASE_URL falls back to request-derived links
        let base_url = std::env::var("BASE_URL")
            .ok()
            .filter(|s| is_valid_url(s));

        Self {
            token_validity_minutes,
            base_url,
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
        }
    }

    /// Set the validity window in minutes
    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.token_validity_minutes = minutes;
        self
    }

    /// Set the configured base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.token_validity_minutes, 1440);
        assert_eq!(config.verify_path, "/api/v1/verification/verify");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_builders() {
        let config = VerificationConfig::default()
            .with_validity_minutes(5)
            .with_base_url("https://verify.example.com");
        assert_eq!(config.token_validity_minutes, 5);
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://verify.example.com")
        );
    }
}
