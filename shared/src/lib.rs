//! Shared utilities and common types for the Bookshop server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error and response envelopes
//! - Credential validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    PasswordConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::HealthResponse;
pub use utils::validation;
