//! Handler for GET /api/v1/verification/verify/{token}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::verification::VerifyResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::verification::AppState;

use ev_core::repositories::VerificationRepository;
use ev_core::services::EmailSenderTrait;

/// Handler for GET /api/v1/verification/verify/{token}
///
/// Resolves a verification token to its outcome. Every outcome is an HTTP
/// 200; the `status` field distinguishes `success`, `already_verified`,
/// `expired`, and `invalid_token`. Non-200 responses only occur when the
/// verification store itself is unavailable.
pub async fn verify<R, E>(
    state: web::Data<AppState<R, E>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: VerificationRepository + 'static,
    E: EmailSenderTrait + 'static,
{
    let request_id = Uuid::new_v4().to_string();
    let token = path.into_inner();

    match state.verification_service.verify_token(&token).await {
        Ok(outcome) => {
            log::info!(
                "[{}] Verification attempt resolved: {}",
                request_id,
                outcome.status_str()
            );
            HttpResponse::Ok().json(VerifyResponse::from_outcome(&outcome))
        }
        Err(error) => {
            log::error!(
                "[{}] Failed to resolve verification token, error: {}",
                request_id,
                error
            );
            domain_error_response(&error, &request_id)
        }
    }
}
