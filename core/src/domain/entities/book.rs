//! Book entity as read from the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog entry that can be purchased
///
/// Books are managed by the catalog; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    /// Price in minor units, never negative
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Book {
    pub fn new(title: impl Into<String>, price: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            price,
            created_at: Utc::now(),
        }
    }
}
