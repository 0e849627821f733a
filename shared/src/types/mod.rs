//! Response payload types

pub mod response;

pub use response::HealthResponse;
