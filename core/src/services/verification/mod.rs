//! Verification service module
//!
//! Contains the pure verification state machine, the submission workflow,
//! and the sender boundary the workflow depends on.

pub mod config;
pub mod outcome;
pub mod service;
pub mod traits;
pub mod types;

pub use config::VerificationServiceConfig;
pub use outcome::{evaluate, VerificationOutcome};
pub use service::VerificationService;
pub use traits::{EmailSendError, EmailSenderTrait};
pub use types::SubmitResult;

#[cfg(test)]
mod tests;
