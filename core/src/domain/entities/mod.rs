//! Domain entities representing core business objects.

pub mod verification;

// Re-export commonly used types
pub use verification::{EmailVerification, VerificationStatus, TOKEN_BYTES};
