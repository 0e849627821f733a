//! Claim set carried by access tokens.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Claims structure for JWT payload
///
/// The only business claim is the user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for `user_id` valid for `ttl_seconds` from now
    ///
    /// Fails with `GenerationFailed` when the lifetime is not positive or the
    /// expiry cannot be represented.
    pub fn new(
        user_id: Uuid,
        issuer: impl Into<String>,
        ttl_seconds: i64,
    ) -> Result<Self, TokenError> {
        let now = Utc::now();
        let expiry = expiry_after(now, ttl_seconds).ok_or(TokenError::GenerationFailed)?;

        Ok(Self {
            user_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
        })
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// `now + ttl_seconds`, if the lifetime is positive and the sum is in range
pub(crate) fn expiry_after(now: DateTime<Utc>, ttl_seconds: i64) -> Option<DateTime<Utc>> {
    if ttl_seconds <= 0 {
        return None;
    }
    TimeDelta::try_seconds(ttl_seconds).and_then(|ttl| now.checked_add_signed(ttl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_lifetime() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "bookshop", 3600).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.iss, "bookshop");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_payload_is_minimal() {
        let claims = Claims::new(Uuid::new_v4(), "bookshop", 60).unwrap();
        let json = serde_json::to_value(&claims).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["exp", "iat", "iss", "userId"]);
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let user_id = Uuid::new_v4();

        for ttl in [i64::MAX, i64::MAX / 1000, 0, -60] {
            assert_eq!(
                Claims::new(user_id, "bookshop", ttl),
                Err(TokenError::GenerationFailed),
                "ttl {ttl}"
            );
        }
    }
}
