//! Request and response bodies

pub mod auth;
pub mod user;

pub use auth::LoginRequest;
pub use user::{CreateUserRequest, DeleteResponse, PurchaseResponse, UpdateRoleRequest};
