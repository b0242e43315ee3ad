//! Configuration for the verification service

use chrono::Duration;
use ev_shared::config::verification::{
    VerificationConfig, DEFAULT_TOKEN_VALIDITY_MINUTES, DEFAULT_VERIFY_PATH,
};

/// Configuration for the verification service
///
/// Constructed once at process start from [`ev_shared::config::VerificationConfig`]
/// and injected into the service; request handling never consults the
/// environment.
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes a pending token stays honorable
    pub token_validity_minutes: i64,
    /// Configured absolute base URL for verification links; when `None`
    /// the transport supplies one derived from the inbound request
    pub base_url: Option<String>,
    /// Path prefix of the verification endpoint
    pub verify_path: String,
}

impl VerificationServiceConfig {
    /// The validity window as a chrono duration
    pub fn window(&self) -> Duration {
        Duration::minutes(self.token_validity_minutes)
    }
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            token_validity_minutes: DEFAULT_TOKEN_VALIDITY_MINUTES,
            base_url: None,
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
        }
    }
}

impl From<VerificationConfig> for VerificationServiceConfig {
    fn from(config: VerificationConfig) -> Self {
        Self {
            token_validity_minutes: config.token_validity_minutes,
            base_url: config.base_url,
            verify_path: config.verify_path,
        }
    }
}
