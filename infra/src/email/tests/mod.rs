//! Email service tests
