//! Token issuing module for JWT access tokens
//!
//! Tokens carry only the user identifier and are verified with the same
//! symmetric secret they were signed with.

mod config;
mod issuer;

#[cfg(test)]
mod tests;

pub use config::TokenIssuerConfig;
pub use issuer::TokenIssuer;
