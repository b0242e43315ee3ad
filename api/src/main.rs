use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

mod app;
mod dto;
mod handlers;
mod routes;

use app::create_app;
use routes::verification::AppState;

use ev_core::services::{VerificationService, VerificationServiceConfig};
use ev_infra::config::EmailConfig;
use ev_infra::database::{DatabasePool, MySqlVerificationRepository};
use ev_infra::email::{create_email_service, EmailSenderAdapter};
use ev_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    // Initialize logger; development defaults to debug verbosity
    let default_filter = if config.environment.is_development() {
        "debug"
    } else {
        "info"
    };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    info!("Starting EmailVerify API Server");
    info!(
        "Environment: {}, token validity: {} minutes",
        config.environment, config.verification.token_validity_minutes
    );

    // Database pool and repository
    let pool = DatabasePool::new(&config.database).await.map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to connect to database: {}", e),
        )
    })?;
    pool.health_check().await.map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Database health check failed: {}", e),
        )
    })?;
    let repository = Arc::new(MySqlVerificationRepository::new(pool.pool().clone()));

    // Email delivery
    let email_config = EmailConfig::from_env();
    if config.environment.is_production() && email_config.provider == "mock" {
        log::warn!("Mock email provider configured in production; no real mail will be sent");
    }
    let email_service: Arc<dyn ev_infra::email::EmailService> =
        Arc::from(create_email_service(&email_config).await);
    info!("Email provider: {}", email_service.provider_name());
    let email_sender = Arc::new(EmailSenderAdapter::new(
        email_service,
        config.verification.token_validity_minutes,
    ));

    // Core service
    let verification_service = Arc::new(VerificationService::new(
        repository,
        email_sender,
        VerificationServiceConfig::from(config.verification.clone()),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_state = web::Data::new(AppState {
        verification_service,
    });

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await
}
