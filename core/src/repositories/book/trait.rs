//! Read access to the book catalog.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Book;
use crate::errors::DomainError;

/// Repository trait for catalog lookups
///
/// Catalog management lives elsewhere; purchases only need to read a book.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a book by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - No book found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError>;
}
