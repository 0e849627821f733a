//! In-memory UserRepository used by tests and local wiring

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::{Transaction, User, UserBook};
use crate::domain::value_objects::{CreateUserInput, UpdateUserRoleInput};
use crate::errors::{DomainError, PreconditionError};

use super::trait_::{TransactionScope, UserRepository};

#[derive(Debug, Clone, Default)]
struct StoreState {
    users: HashMap<Uuid, User>,
    transactions: Vec<Transaction>,
    user_books: Vec<UserBook>,
}

/// In-memory user store
///
/// One async mutex guards the whole state and is held for the duration of a
/// unit of work, so units of work never interleave. Writes are staged on a
/// copy of the state and only replace it on commit.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<StoreState>>,
    fail_next_ledger_insert: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `user` as is, replacing any user with the same ID
    pub async fn insert(&self, user: User) {
        self.state.lock().await.users.insert(user.id, user);
    }

    /// Make the next `insert_transaction` inside a unit of work fail
    pub fn fail_next_ledger_insert(&self) {
        self.fail_next_ledger_insert.store(true, Ordering::SeqCst);
    }

    /// Committed ledger entries
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().await.transactions.clone()
    }

    /// Committed ownership grants
    pub async fn user_books(&self) -> Vec<UserBook> {
        self.state.lock().await.user_books.clone()
    }
}

/// Staged writes of one in-memory unit of work
pub struct InMemoryScope {
    staged: StoreState,
    fail_ledger_insert: Arc<AtomicBool>,
}

#[async_trait]
impl TransactionScope for InMemoryScope {
    async fn lock_user(&mut self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.staged.users.get(&id).cloned())
    }

    async fn save_user(&mut self, user: &User) -> Result<(), DomainError> {
        match self.staged.users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(DomainError::internal(format!(
                "update affected no rows for user {}",
                user.id
            ))),
        }
    }

    async fn insert_transaction(&mut self, entry: &Transaction) -> Result<(), DomainError> {
        if self.fail_ledger_insert.swap(false, Ordering::SeqCst) {
            return Err(DomainError::internal("injected ledger insert failure"));
        }
        self.staged.transactions.push(entry.clone());
        Ok(())
    }

    async fn insert_user_book(&mut self, grant: &UserBook) -> Result<(), DomainError> {
        self.staged.user_books.push(grant.clone());
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    type Scope = InMemoryScope;

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let state = self.state.lock().await;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by_key(|user| user.created_at);
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(
        &self,
        password_hash: String,
        input: &CreateUserInput,
    ) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;

        if state.users.values().any(|user| user.username == input.username) {
            return Err(PreconditionError::UsernameTaken.into());
        }

        let user = User::new(
            input.username.clone(),
            password_hash,
            input.role,
            input.balance,
        );
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_role(&self, input: UpdateUserRoleInput) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        let user = state
            .users
            .get_mut(&input.user_id)
            .ok_or_else(|| DomainError::not_found("User"))?;

        user.set_role(input.role);
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.lock().await;
        Ok(state.users.remove(&id).is_some())
    }

    async fn execute_in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: for<'t> FnOnce(&'t mut Self::Scope) -> BoxFuture<'t, Result<T, DomainError>>
            + Send
            + 'static,
    {
        let mut state = self.state.lock().await;
        let mut scope = InMemoryScope {
            staged: (*state).clone(),
            fail_ledger_insert: Arc::clone(&self.fail_next_ledger_insert),
        };

        let value = work(&mut scope).await?;
        *state = scope.staged;
        Ok(value)
    }
}
