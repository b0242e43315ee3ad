//! Verification route handlers
//!
//! - `POST /api/v1/verification/submit`: accept an email address, mint a
//!   token, and dispatch the verification link
//! - `GET /api/v1/verification/verify/{token}`: resolve a token to one of
//!   the four verification outcomes

pub mod submit;
pub mod verify;

pub use submit::AppState;
