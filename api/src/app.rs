//! Application factory
//!
//! Builds the actix-web application generic over the repository and email
//! sender traits, so the binary wires real infrastructure while integration
//! tests run the same routes against mocks.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::routes::health::health_check;
use crate::routes::verification::{submit::submit, verify::verify, AppState};

use ev_core::repositories::VerificationRepository;
use ev_core::services::EmailSenderTrait;

/// Create and configure the application with all routes
pub fn create_app<R, E>(
    app_state: web::Data<AppState<R, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: VerificationRepository + 'static,
    E: EmailSenderTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/verification")
                    .route("/submit", web::post().to(submit::<R, E>))
                    .route("/verify/{token}", web::get().to(verify::<R, E>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
