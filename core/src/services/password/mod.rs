//! One-way password hashing
//!
//! bcrypt is CPU bound; async callers go through the `*_blocking` variants,
//! which run the work on tokio's blocking pool.

mod hasher;

pub use hasher::PasswordHasher;
