//! Domain entities representing core business objects.

pub mod book;
pub mod token;
pub mod transaction;
pub mod user;
pub mod user_book;

// Re-export commonly used types
pub use book::Book;
pub use token::Claims;
pub use transaction::{Transaction, TransactionAction};
pub use user::{User, UserRole};
pub use user_book::UserBook;
