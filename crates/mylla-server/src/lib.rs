//! HTTP front end for the mylla advisory engine.
//!
//! Exposes the two prediction endpoints and the status route over axum.
//! Models and ruleset are loaded once at startup and shared read-only.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::MyllaServer;
