//! Domain-specific error types and error handling.

mod domain_error;

pub use domain_error::{DomainError, ValidationError};

/// Convenience result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
