//! MySQL repository implementations

pub mod book_repository_impl;
pub mod user_repository_impl;

pub use book_repository_impl::MySqlBookRepository;
pub use user_repository_impl::{MySqlTransactionScope, MySqlUserRepository};

use bs_core::errors::DomainError;

/// Map a driver error to `DomainError::Internal` with `context`
pub(crate) fn storage_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::internal(format!("{}: {}", context, e))
}
