//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod purchase;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::AuthService;
pub use password::PasswordHasher;
pub use purchase::PurchaseService;
pub use token::{TokenIssuer, TokenIssuerConfig};
pub use user::UserService;
