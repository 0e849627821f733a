//! Inputs accepted by user write operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::UserRole;

/// Data needed to register a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub username: String,
    /// Plaintext password, hashed before it is stored
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    /// Opening balance in minor units
    #[serde(default)]
    pub balance: i64,
}

/// Role change for an existing user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRoleInput {
    pub user_id: Uuid,
    pub role: UserRole,
}
