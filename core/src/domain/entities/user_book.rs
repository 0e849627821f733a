//! Ownership grants linking users to the books they bought.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Records that a user owns a book
///
/// A user may hold several grants for the same book, one per purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBook {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl UserBook {
    pub fn grant(user_id: Uuid, book_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            book_id,
            created_at: Utc::now(),
        }
    }
}
