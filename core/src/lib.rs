//! # EmailVerify Core
//!
//! Core business logic and domain layer for the EmailVerify backend.
//! This crate contains the verification record entity, the verification
//! state machine, repository interfaces, business services, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
