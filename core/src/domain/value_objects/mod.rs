//! Value objects passed in and out of services.

pub mod login_response;
pub mod user_input;

pub use login_response::LoginResponse;
pub use user_input::{CreateUserInput, UpdateUserRoleInput};
