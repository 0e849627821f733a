//! Ledger entries recorded for completed purchases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionAction {
    Buy,
}

impl TransactionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Buy => "BUY",
        }
    }
}

impl std::fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TransactionAction::Buy),
            _ => Err(format!("Invalid transaction action: {}", s)),
        }
    }
}

/// Immutable ledger entry
///
/// Entries are append-only. `user_id` and `book_id` are plain references,
/// so deleting a user or a book leaves the ledger intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub action: TransactionAction,
    /// Amount charged in minor units
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Ledger entry for a purchase of `book_id` at `amount`
    pub fn buy(user_id: Uuid, book_id: Uuid, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            book_id,
            action: TransactionAction::Buy,
            amount,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_entry() {
        let user_id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let entry = Transaction::buy(user_id, book_id, 400);

        assert_eq!(entry.action, TransactionAction::Buy);
        assert_eq!(entry.amount, 400);
        assert_eq!(entry.user_id, user_id);
        assert_eq!(entry.book_id, book_id);
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_string(&TransactionAction::Buy).unwrap();
        assert_eq!(json, "\"BUY\"");
        assert_eq!("BUY".parse::<TransactionAction>().unwrap(), TransactionAction::Buy);
        assert!("SELL".parse::<TransactionAction>().is_err());
    }
}
