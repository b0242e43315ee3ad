//! Email Service Interface
//!
//! Defines the trait for email delivery implementations and the composition
//! of the standard verification message.

use async_trait::async_trait;

use crate::InfrastructureError;

pub use ev_shared::utils::validation::mask_email;

/// Email service trait for outbound delivery
///
/// Implementations include:
/// - AWS SES v2
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient address
    /// * `subject` - Message subject line
    /// * `html_body` - HTML alternative of the body
    /// * `text_body` - Plain-text alternative of the body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If delivery fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send the standard verification message for a link
    ///
    /// Convenience method composing the application's verification email
    /// around the given link and validity window.
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient address
    /// * `verification_url` - Absolute verification link
    /// * `validity_minutes` - Configured window, named in the message body
    async fn send_verification_email(
        &self,
        to: &str,
        verification_url: &str,
        validity_minutes: i64,
    ) -> Result<String, InfrastructureError> {
        self.send_email(
            to,
            VERIFICATION_SUBJECT,
            &verification_html_body(verification_url, validity_minutes),
            &verification_text_body(verification_url, validity_minutes),
        )
        .await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Subject line of the verification message
pub const VERIFICATION_SUBJECT: &str = "Email Verification Required";

/// Human-readable form of the validity window for message bodies
fn humanize_window(validity_minutes: i64) -> String {
    if validity_minutes >= 60 && validity_minutes % 60 == 0 {
        let hours = validity_minutes / 60;
        if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", hours)
        }
    } else if validity_minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", validity_minutes)
    }
}

/// HTML body of the standard verification message
pub fn verification_html_body(verification_url: &str, validity_minutes: i64) -> String {
    format!(
        "<html>\n<body>\n\
         <h2>Email Verification</h2>\n\
         <p>Thank you for submitting your email address. Please click the link below to verify your email:</p>\n\
         <p><a href='{url}'>Verify Email</a></p>\n\
         <p>If the button doesn't work, copy and paste this link into your browser:</p>\n\
         <p>{url}</p>\n\
         <p>This link will expire after {window} for security reasons.</p>\n\
         </body>\n</html>",
        url = verification_url,
        window = humanize_window(validity_minutes),
    )
}

/// Plain-text body of the standard verification message
pub fn verification_text_body(verification_url: &str, validity_minutes: i64) -> String {
    format!(
        "Email Verification\n\n\
         Thank you for submitting your email address. Please visit the following link to verify your email:\n\n\
         {url}\n\n\
         This link will expire after {window} for security reasons.",
        url = verification_url,
        window = humanize_window(validity_minutes),
    )
}
