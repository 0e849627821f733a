//! Successful login payload.

use serde::{Deserialize, Serialize};

/// Access token and the configured expiry, in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            expires_in,
        }
    }
}
