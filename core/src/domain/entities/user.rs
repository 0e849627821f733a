//! User entity representing a registered account in the Bookshop system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PreconditionError;

/// Role stored on a user account
///
/// The role is persisted and returned; enforcing it is left to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A regular customer
    #[default]
    User,
    /// An administrator
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity
///
/// `balance` is held in integer minor units and never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// bcrypt digest of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Spendable balance in minor units
    pub balance: i64,

    /// Stored role
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: String, password_hash: String, role: UserRole, balance: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            balance,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the balance covers `amount`
    pub fn can_afford(&self, amount: i64) -> bool {
        amount >= 0 && self.balance >= amount
    }

    /// Subtracts `amount` from the balance
    ///
    /// Leaves the user untouched when the result would be negative.
    pub fn debit(&mut self, amount: i64) -> Result<(), PreconditionError> {
        if amount < 0 {
            return Err(PreconditionError::InvalidAmount);
        }
        match self.balance.checked_sub(amount) {
            Some(remaining) if remaining >= 0 => {
                self.balance = remaining;
                self.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(PreconditionError::InsufficientBalance),
        }
    }

    /// Sets the stored role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_balance(balance: i64) -> User {
        User::new("reader".to_string(), "hash".to_string(), UserRole::User, balance)
    }

    #[test]
    fn test_new_user_creation() {
        let user = user_with_balance(1000);

        assert_eq!(user.username, "reader");
        assert_eq!(user.balance, 1000);
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_debit_reduces_balance() {
        let mut user = user_with_balance(1000);
        user.debit(400).unwrap();
        assert_eq!(user.balance, 600);

        user.debit(600).unwrap();
        assert_eq!(user.balance, 0);
    }

    #[test]
    fn test_debit_rejects_overdraw() {
        let mut user = user_with_balance(100);
        assert_eq!(user.debit(400), Err(PreconditionError::InsufficientBalance));
        assert_eq!(user.balance, 100);
        assert!(!user.can_afford(400));
        assert!(user.can_afford(100));
    }

    #[test]
    fn test_debit_rejects_negative_amount() {
        let mut user = user_with_balance(100);
        assert_eq!(user.debit(-5), Err(PreconditionError::InvalidAmount));
        assert_eq!(user.balance, 100);
    }

    #[test]
    fn test_set_role() {
        let mut user = user_with_balance(0);
        user.set_role(UserRole::Admin);
        assert!(user.is_admin());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = user_with_balance(10);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert!("root".parse::<UserRole>().is_err());
    }
}
