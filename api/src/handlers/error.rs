//! Domain error to HTTP response mapping
//!
//! Maps `DomainError` variants to HTTP status codes and the standard error
//! payload. Verification outcomes are not errors and never pass through
//! here; only genuine failures (bad input, store outage, delivery failure)
//! become non-200 responses.

use actix_web::HttpResponse;
use log::warn;

use ev_core::errors::DomainError;
use ev_shared::ApiResponse;

/// Client-facing message for an error, without provider internals
fn client_message(error: &DomainError) -> String {
    match error {
        DomainError::Validation(e) => e.to_string(),
        DomainError::StoreUnavailable { .. } => {
            "Verification store is temporarily unavailable. Please try again later.".to_string()
        }
        DomainError::EmailDelivery { retryable: true, .. } => {
            "Could not send the verification email right now. Please try again later.".to_string()
        }
        DomainError::EmailDelivery { retryable: false, .. } => {
            "Failed to send the verification email.".to_string()
        }
    }
}

/// Map a domain error to an HTTP response
///
/// # Status codes
///
/// * Validation failures -> 400 Bad Request
/// * Store unavailability -> 503 Service Unavailable
/// * Retryable delivery failures -> 503 Service Unavailable
/// * Fatal delivery failures -> 502 Bad Gateway
pub fn domain_error_response(error: &DomainError, request_id: &str) -> HttpResponse {
    let body = ApiResponse::<()>::error(format!(
        "{}: {}",
        error.error_code(),
        client_message(error)
    ))
    .with_request_id(request_id);

    match error {
        DomainError::Validation(_) => HttpResponse::BadRequest().json(body),
        DomainError::StoreUnavailable { operation, message } => {
            warn!(
                "[{}] Store unavailable during {}: {}",
                request_id, operation, message
            );
            HttpResponse::ServiceUnavailable().json(body)
        }
        DomainError::EmailDelivery {
            retryable, message, ..
        } => {
            warn!(
                "[{}] Email delivery failed (retryable: {}): {}",
                request_id, retryable, message
            );
            if *retryable {
                HttpResponse::ServiceUnavailable().json(body)
            } else {
                HttpResponse::BadGateway().json(body)
            }
        }
    }
}
