//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/login
///
/// Only presence is checked here; the credentials themselves are judged by
/// the authentication service so that every rejection looks the same.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
