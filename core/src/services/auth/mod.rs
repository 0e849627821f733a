//! Authentication service module
//!
//! Validates username/password pairs and issues access tokens.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
