//! Handler for POST /api/v1/verification/submit

use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::verification::{SubmitEmailRequest, SubmitEmailResponse};
use crate::handlers::error::domain_error_response;

use ev_core::repositories::VerificationRepository;
use ev_core::services::{EmailSenderTrait, VerificationService};
use ev_shared::utils::validation::mask_email;
use ev_shared::ApiResponse;

/// Application state that holds the shared verification service
pub struct AppState<R, E>
where
    R: VerificationRepository,
    E: EmailSenderTrait,
{
    pub verification_service: Arc<VerificationService<R, E>>,
}

/// Handler for POST /api/v1/verification/submit
///
/// Accepts an email address, persists a pending verification record, and
/// sends the verification link.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com"
/// }
/// ```
///
/// # Responses
///
/// * `200` - Verification email sent; the response envelope carries the
///   minted token
/// * `400` - Invalid email address
/// * `503` - Verification store unavailable, or delivery worth retrying
/// * `502` - Delivery rejected by the provider
pub async fn submit<R, E>(
    req: HttpRequest,
    state: web::Data<AppState<R, E>>,
    request: web::Json<SubmitEmailRequest>,
) -> HttpResponse
where
    R: VerificationRepository + 'static,
    E: EmailSenderTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    log::info!(
        "[{}] Processing submit request for email: {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(validation_errors) = request.0.validate() {
        let messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| errors.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();

        log::warn!(
            "[{}] Validation failed for submit request: {:?}",
            request_id,
            messages
        );

        let body =
            ApiResponse::<()>::error(messages.join("; ")).with_request_id(&request_id);
        return HttpResponse::BadRequest().json(body);
    }

    // Fallback base for the verification link when no BASE_URL is configured
    let connection_info = req.connection_info();
    let fallback_base_url = format!("{}://{}", connection_info.scheme(), connection_info.host());
    drop(connection_info);

    match state
        .verification_service
        .submit_email(&request.email, &fallback_base_url)
        .await
    {
        Ok(result) => {
            log::info!(
                "[{}] Verification email sent to: {}, message_id: {}",
                request_id,
                mask_email(&result.verification.email),
                result.message_id
            );

            let body = ApiResponse::success(SubmitEmailResponse {
                message: "Verification email sent. Please check your inbox.".to_string(),
                token: result.verification.token,
            })
            .with_request_id(&request_id);
            HttpResponse::Ok().json(body)
        }
        Err(error) => {
            log::error!(
                "[{}] Failed to process submission for: {}, error: {}",
                request_id,
                mask_email(&request.email),
                error
            );
            domain_error_response(&error, &request_id)
        }
    }
}
