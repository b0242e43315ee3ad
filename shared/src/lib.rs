//! Shared utilities and common types for the EmailVerify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, ServerConfig, VerificationConfig};
pub use types::{ApiResponse, HealthResponse};
pub use utils::validation;
