//! HTTP API layer for the EmailVerify backend
//!
//! Exposes the verification endpoints over actix-web and wires the core
//! service to concrete infrastructure at startup. Library exports exist so
//! integration tests can build the application against mock services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
