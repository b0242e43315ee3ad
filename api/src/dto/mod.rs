//! Request and response data transfer objects

pub mod verification;

pub use verification::{SubmitEmailRequest, SubmitEmailResponse, VerifyResponse};
