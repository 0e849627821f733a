//! In-memory BookRepository used by tests and local wiring

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Book;
use crate::errors::DomainError;

use super::trait_::BookRepository;

/// In-memory book catalog
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<Uuid, Book>>>,
}

impl InMemoryBookRepository {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a book
    pub async fn insert(&self, book: Book) {
        self.books.write().await.insert(book.id, book);
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryBookRepository::new();
        let book = Book::new("The Rust Book", 400);
        repo.insert(book.clone()).await;

        assert_eq!(repo.find_by_id(book.id).await.unwrap(), Some(book));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}
