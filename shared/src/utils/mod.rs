//! Utility helpers shared by the server crates

pub mod validation;
