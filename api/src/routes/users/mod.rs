//! User management route handlers
//!
//! Role is stored and returned but not enforced on these routes.

pub mod create;
pub mod delete;
pub mod query;
pub mod update_role;

pub use create::create_user;
pub use delete::delete_user;
pub use query::{get_user, get_user_by_username, list_users};
pub use update_role::update_role;
