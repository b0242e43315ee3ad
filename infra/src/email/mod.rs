//! Email Service Module
//!
//! Outbound email delivery for verification links. Includes support for AWS
//! SES and a mock implementation for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all providers
//! - **Mock Implementation**: Console output for development
//! - **AWS SES Support**: Production delivery via SES v2
//! - **Security**: Recipient addresses masked in logs

pub mod email_service;
pub mod mock_email;
pub mod trait_adapter;

// AWS SES email service (feature-gated)
#[cfg(feature = "aws-ses")]
pub mod aws_ses;

// Re-export commonly used types
pub use email_service::EmailService;
pub use mock_email::MockEmailService;
pub use trait_adapter::EmailSenderAdapter;

#[cfg(feature = "aws-ses")]
pub use aws_ses::{AwsSesConfig, AwsSesEmailService};

#[cfg(test)]
mod tests;

use crate::config::EmailConfig;

/// Create an email service based on configuration
///
/// Returns the provider named in the configuration, falling back to the mock
/// service when provider initialization fails.
///
/// # Arguments
///
/// * `config` - Email configuration containing provider settings
///
/// # Returns
///
/// A boxed email service implementation
pub async fn create_email_service(config: &EmailConfig) -> Box<dyn EmailService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockEmailService::new()),
        #[cfg(feature = "aws-ses")]
        "aws-ses" => {
            let ses_config = AwsSesConfig {
                region: config.region.clone(),
                sender_email: config.sender_email.clone(),
                ..AwsSesConfig::default()
            };

            match AwsSesEmailService::new(ses_config).await {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize AWS SES email service: {}", e);
                    tracing::warn!("Falling back to mock email service");
                    Box::new(MockEmailService::new())
                }
            }
        }
        other => {
            tracing::warn!(provider = other, "Unknown email provider, using mock");
            Box::new(MockEmailService::new())
        }
    }
}
