//! AWS SES Email Service Implementation
//!
//! Email delivery using the AWS SES v2 API. Implements the EmailService
//! trait for production delivery.
//!
//! ## Features
//!
//! - HTML and plain-text alternatives per message
//! - Provider rejection classification (unverified sender and unverified
//!   MAIL FROM domain are fatal; throttling is retryable)
//! - Security: recipient addresses masked in logs

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sesv2::config::Region;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;
use tracing::{error, info};

use super::email_service::{mask_email, EmailService};
use crate::InfrastructureError;

/// AWS SES email service configuration
#[derive(Debug, Clone)]
pub struct AwsSesConfig {
    /// AWS Region (e.g., "us-east-1")
    pub region: String,
    /// Verified sender address
    pub sender_email: String,
    /// Optional SES configuration set name
    pub configuration_set: Option<String>,
}

impl Default for AwsSesConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            sender_email: "noreply@example.com".to_string(),
            configuration_set: None,
        }
    }
}

impl AwsSesConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let sender_email = std::env::var("SENDER_EMAIL")
            .map_err(|_| InfrastructureError::Config("SENDER_EMAIL not set".to_string()))?;

        let region = std::env::var("AWS_REGION")
            .or_else(|_| std::env::var("AWS_SES_REGION"))
            .unwrap_or_else(|_| "us-east-1".to_string());

        Ok(Self {
            region,
            sender_email,
            configuration_set: std::env::var("AWS_SES_CONFIGURATION_SET").ok(),
        })
    }
}

/// AWS SES email service implementation
pub struct AwsSesEmailService {
    client: SesClient,
    config: AwsSesConfig,
}

impl AwsSesEmailService {
    /// Create a new AWS SES email service
    ///
    /// Credentials come from the default AWS provider chain (environment,
    /// profile, instance role).
    pub async fn new(config: AwsSesConfig) -> Result<Self, InfrastructureError> {
        if config.sender_email.is_empty() {
            return Err(InfrastructureError::Config(
                "Sender email is not configured".to_string(),
            ));
        }

        let region = Region::new(config.region.clone());
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let client = SesClient::new(&aws_config);

        info!(
            region = %config.region,
            sender = %mask_email(&config.sender_email),
            "AWS SES email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub async fn from_env() -> Result<Self, InfrastructureError> {
        let config = AwsSesConfig::from_env()?;
        Self::new(config).await
    }

    fn content(data: &str) -> Result<Content, InfrastructureError> {
        Content::builder()
            .data(data)
            .charset("UTF-8")
            .build()
            .map_err(|e| InfrastructureError::Config(format!("Invalid email content: {}", e)))
    }
}

#[async_trait]
impl EmailService for AwsSesEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        let destination = Destination::builder().to_addresses(to).build();

        let body = Body::builder()
            .html(Self::content(html_body)?)
            .text(Self::content(text_body)?)
            .build();

        let message = Message::builder()
            .subject(Self::content(subject)?)
            .body(body)
            .build();

        let content = EmailContent::builder().simple(message).build();

        let mut request = self
            .client
            .send_email()
            .from_email_address(&self.config.sender_email)
            .destination(destination)
            .content(content);

        if let Some(ref configuration_set) = self.config.configuration_set {
            request = request.configuration_set_name(configuration_set);
        }

        let response = request.send().await.map_err(|e| {
            let service_err = e.into_service_error();

            let retryable = service_err.is_too_many_requests_exception()
                || service_err.is_limit_exceeded_exception()
                || service_err.is_sending_paused_exception();

            let message = if service_err.is_message_rejected() {
                format!(
                    "SES rejected the message (is the sender '{}' verified?): {}",
                    self.config.sender_email, service_err
                )
            } else if service_err.is_mail_from_domain_not_verified_exception() {
                format!("SES sender domain not verified: {}", service_err)
            } else {
                service_err.to_string()
            };

            error!(
                recipient = %masked,
                retryable = retryable,
                error = %message,
                "Failed to send email via SES"
            );

            InfrastructureError::Email { message, retryable }
        })?;

        let message_id = response
            .message_id()
            .unwrap_or("unknown")
            .to_string();

        info!(
            target: "email_service",
            provider = "aws-ses",
            recipient = %masked,
            message_id = %message_id,
            "Email sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "AWS SES"
    }
}
