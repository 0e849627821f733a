//! User and purchase DTOs

use bs_core::{CreateUserInput, UserRole};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request body for POST /api/v1/users
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: String,

    #[validate(length(
        min = 8,
        max = 72,
        message = "Password must be between 8 and 72 characters"
    ))]
    pub password: String,

    #[serde(default)]
    pub role: Option<UserRole>,

    /// Opening balance in minor units
    #[validate(custom = "non_negative")]
    #[serde(default)]
    pub balance: Option<i64>,
}

fn non_negative(balance: i64) -> Result<(), ValidationError> {
    if balance < 0 {
        let mut error = ValidationError::new("range");
        error.message = Some("Balance must not be negative".into());
        return Err(error);
    }
    Ok(())
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            password: request.password,
            role: request.role.unwrap_or_default(),
            balance: request.balance.unwrap_or(0),
        }
    }
}

/// Request body for PATCH /api/v1/users/{id}/role
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PurchaseResponse {
    pub success: bool,
}
