//! MySQL implementation of the UserRepository trait.
//!
//! Plain reads and writes go straight to the pool. Units of work run on a
//! single transaction; `lock_user` takes the row lock with `FOR UPDATE` so a
//! concurrent purchase waits until the first one commits or rolls back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, Row};
use uuid::Uuid;

use bs_core::domain::entities::{Transaction, User, UserBook, UserRole};
use bs_core::domain::value_objects::{CreateUserInput, UpdateUserRoleInput};
use bs_core::errors::{DomainError, PreconditionError};
use bs_core::repositories::{TransactionScope, UserRepository};

use super::storage_error;

const USER_COLUMNS: &str =
    "id, username, password_hash, balance, role, created_at, updated_at";

/// MySQL implementation of UserRepository
#[derive(Clone)]
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Convert database row to User entity
fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
    let id: String = row.try_get("id").map_err(storage_error("Failed to get id"))?;
    let role: String = row
        .try_get("role")
        .map_err(storage_error("Failed to get role"))?;

    Ok(User {
        id: Uuid::parse_str(&id)
            .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
        username: row
            .try_get("username")
            .map_err(storage_error("Failed to get username"))?,
        password_hash: row
            .try_get("password_hash")
            .map_err(storage_error("Failed to get password_hash"))?,
        balance: row
            .try_get("balance")
            .map_err(storage_error("Failed to get balance"))?,
        role: role
            .parse::<UserRole>()
            .map_err(|e| DomainError::internal(e))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(storage_error("Failed to get created_at"))?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(storage_error("Failed to get updated_at"))?,
    })
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    type Scope = MySqlTransactionScope;

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {} FROM users ORDER BY created_at", USER_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("Database query failed"))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Database query failed"))?;

        result.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE username = ? LIMIT 1",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Database query failed"))?;

        result.as_ref().map(row_to_user).transpose()
    }

    async fn create(
        &self,
        password_hash: String,
        input: &CreateUserInput,
    ) -> Result<User, DomainError> {
        let user = User::new(input.username.clone(), password_hash, input.role, input.balance);

        let query = r#"
            INSERT INTO users (
                id, username, password_hash, balance, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.balance)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::from(PreconditionError::UsernameTaken)
                } else {
                    DomainError::internal(format!("Failed to create user: {}", e))
                }
            })?;

        Ok(user)
    }

    async fn update_role(&self, input: UpdateUserRoleInput) -> Result<User, DomainError> {
        let query = "UPDATE users SET role = ?, updated_at = ? WHERE id = ?";

        sqlx::query(query)
            .bind(input.role.as_str())
            .bind(Utc::now())
            .bind(input.user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to update user"))?;

        // MySQL reports zero affected rows for a no-op update, so existence is checked by re-reading
        self.find_by_id(input.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM users WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(storage_error("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn execute_in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: for<'t> FnOnce(&'t mut Self::Scope) -> BoxFuture<'t, Result<T, DomainError>>
            + Send
            + 'static,
    {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;
        let mut scope = MySqlTransactionScope { tx };

        match work(&mut scope).await {
            Ok(value) => {
                scope
                    .tx
                    .commit()
                    .await
                    .map_err(storage_error("Failed to commit transaction"))?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_error) = scope.tx.rollback().await {
                    tracing::warn!(error = %rollback_error, "Rollback failed; connection drop will discard the transaction");
                }
                Err(e)
            }
        }
    }
}

/// Transaction-bound handle used inside `execute_in_transaction`
///
/// Dropping it without commit rolls the transaction back.
pub struct MySqlTransactionScope {
    tx: sqlx::Transaction<'static, MySql>,
}

#[async_trait]
impl TransactionScope for MySqlTransactionScope {
    async fn lock_user(&mut self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE id = ? FOR UPDATE",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(storage_error("Failed to lock user"))?;

        result.as_ref().map(row_to_user).transpose()
    }

    async fn save_user(&mut self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users SET
                balance = ?,
                role = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(user.balance)
            .bind(user.role.as_str())
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&mut *self.tx)
            .await
            .map_err(storage_error("Failed to update user"))?;

        Ok(())
    }

    async fn insert_transaction(&mut self, entry: &Transaction) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO transactions (id, user_id, book_id, action, amount, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(entry.id.to_string())
            .bind(entry.user_id.to_string())
            .bind(entry.book_id.to_string())
            .bind(entry.action.as_str())
            .bind(entry.amount)
            .bind(entry.created_at)
            .execute(&mut *self.tx)
            .await
            .map_err(storage_error("Failed to insert transaction"))?;

        Ok(())
    }

    async fn insert_user_book(&mut self, grant: &UserBook) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO user_books (id, user_id, book_id, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(grant.id.to_string())
            .bind(grant.user_id.to_string())
            .bind(grant.book_id.to_string())
            .bind(grant.created_at)
            .execute(&mut *self.tx)
            .await
            .map_err(storage_error("Failed to insert user book"))?;

        Ok(())
    }
}
