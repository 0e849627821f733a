//! MySQL implementation of the BookRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use bs_core::domain::entities::Book;
use bs_core::errors::DomainError;
use bs_core::repositories::BookRepository;

use super::storage_error;

/// MySQL implementation of BookRepository
#[derive(Clone)]
pub struct MySqlBookRepository {
    pool: MySqlPool,
}

impl MySqlBookRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn row_to_book(row: &MySqlRow) -> Result<Book, DomainError> {
    let id: String = row.try_get("id").map_err(storage_error("Failed to get id"))?;

    Ok(Book {
        id: Uuid::parse_str(&id)
            .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
        title: row
            .try_get("title")
            .map_err(storage_error("Failed to get title"))?,
        price: row
            .try_get("price")
            .map_err(storage_error("Failed to get price"))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(storage_error("Failed to get created_at"))?,
    })
}

#[async_trait]
impl BookRepository for MySqlBookRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        let query = "SELECT id, title, price, created_at FROM books WHERE id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Database query failed"))?;

        result.as_ref().map(row_to_book).transpose()
    }
}
