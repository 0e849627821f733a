//! Book route handlers

pub mod buy;

pub use buy::buy;
