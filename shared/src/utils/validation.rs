//! Credential validation rules shared by the API and domain layers

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum username length in characters
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length in characters
pub const USERNAME_MAX_LEN: usize = 50;
/// Minimum password length in bytes
pub const PASSWORD_MIN_LEN: usize = 8;
/// bcrypt only reads the first 72 bytes of a password
pub const PASSWORD_MAX_LEN: usize = 72;

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+$").expect("username pattern is a valid regex")
});

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }
}

/// Username is 3..=50 characters of letters, digits, `_`, `.` or `-`
pub fn is_valid_username(username: &str) -> bool {
    validators::length_between(username, USERNAME_MIN_LEN, USERNAME_MAX_LEN)
        && USERNAME_PATTERN.is_match(username)
}

/// Password length is checked in bytes because that is what the hash consumes
pub fn is_valid_password(password: &str) -> bool {
    (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&password.len())
}
