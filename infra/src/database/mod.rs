//! Database access layer
//!
//! MySQL connection pooling and repository implementations using SQLx.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlVerificationRepository;
