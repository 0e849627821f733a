//! User repository trait defining the interface for user data persistence.
//!
//! Besides plain lookups and writes, the repository exposes a scoped unit of
//! work: every write issued through the [`TransactionScope`] handed to the
//! closure commits together or not at all.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use uuid::Uuid;

use crate::domain::entities::{Transaction, User, UserBook};
use crate::domain::value_objects::{CreateUserInput, UpdateUserRoleInput};
use crate::errors::DomainError;

/// Transactional handle passed to a unit of work
///
/// Dropping the handle without committing discards every write made
/// through it.
#[async_trait]
pub trait TransactionScope: Send {
    /// Read a user and hold its row lock until the unit of work ends
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found and locked
    /// * `Ok(None)` - No user with the given ID
    async fn lock_user(&mut self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist the mutable fields of `user`
    async fn save_user(&mut self, user: &User) -> Result<(), DomainError>;

    /// Append a ledger entry
    async fn insert_transaction(&mut self, entry: &Transaction) -> Result<(), DomainError>;

    /// Append an ownership grant
    async fn insert_user_book(&mut self, grant: &UserBook) -> Result<(), DomainError>;
}

/// Repository trait for User entity persistence operations
///
/// Storage failures are reported as `DomainError::Internal`; callers decide
/// what reaches their own callers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Handle type for units of work run by this repository
    type Scope: TransactionScope;

    /// List every user, possibly none
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user from `input` storing `password_hash`
    ///
    /// `input.password` is ignored; only the digest is stored.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Precondition(UsernameTaken))` - Username already in use
    async fn create(
        &self,
        password_hash: String,
        input: &CreateUserInput,
    ) -> Result<User, DomainError>;

    /// Update the stored role of a user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with the given ID
    async fn update_role(&self, input: UpdateUserRoleInput) -> Result<User, DomainError>;

    /// Delete a user from the repository
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Run `work` as a single unit of work
    ///
    /// Commits when `work` returns `Ok` and rolls back when it returns `Err`.
    /// The error from `work` is returned unchanged; a failed commit is
    /// reported as `DomainError::Internal`.
    ///
    /// # Example
    /// ```no_run
    /// # use futures_util::FutureExt;
    /// # use bs_core::repositories::{TransactionScope, UserRepository};
    /// # use bs_core::errors::DomainError;
    /// # async fn example(repo: &impl UserRepository, id: uuid::Uuid) -> Result<(), DomainError> {
    /// repo.execute_in_transaction(move |scope| {
    ///     async move {
    ///         let mut user = scope.lock_user(id).await?.ok_or_else(|| DomainError::not_found("User"))?;
    ///         user.debit(10)?;
    ///         scope.save_user(&user).await
    ///     }
    ///     .boxed()
    /// })
    /// .await
    /// # }
    /// ```
    async fn execute_in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: for<'t> FnOnce(&'t mut Self::Scope) -> BoxFuture<'t, Result<T, DomainError>>
            + Send
            + 'static;
}
