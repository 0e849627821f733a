//! Purchase service implementation

use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{instrument, Span};
use uuid::Uuid;

use crate::domain::entities::{Transaction, UserBook};
use crate::errors::{DomainError, DomainResult, PreconditionError};
use crate::repositories::{BookRepository, TransactionScope, UserRepository};

/// Service performing atomic book purchases
pub struct PurchaseService<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    user_repository: Arc<U>,
    book_repository: Arc<B>,
    span: Span,
}

impl<U, B> PurchaseService<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    pub fn new(user_repository: Arc<U>, book_repository: Arc<B>) -> Self {
        Self {
            user_repository,
            book_repository,
            span: tracing::info_span!("purchase_service"),
        }
    }

    /// Attach log output of this service to `span`
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Buy `book_id` for `user_id` at the book's current price
    ///
    /// Preconditions are checked in order: the user exists, the book exists,
    /// the balance covers the price. The debit, ledger entry and ownership
    /// grant are then written in one unit of work that re-reads the user under
    /// a row lock, so a purchase racing this one cannot overdraw the balance.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All three writes committed
    /// * `Err(DomainError::NotFound)` - User or book missing, including a user
    ///   deleted between the checks and the unit of work
    /// * `Err(DomainError::Precondition)` - Balance does not cover the price
    /// * `Err(DomainError::OperationFailed)` - Anything else; nothing was written
    #[instrument(parent = &self.span, skip(self))]
    pub async fn buy(&self, user_id: Uuid, book_id: Uuid) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| e.at_boundary("buy"))?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let book = self
            .book_repository
            .find_by_id(book_id)
            .await
            .map_err(|e| e.at_boundary("buy"))?
            .ok_or_else(|| DomainError::not_found("Book"))?;

        if book.price < 0 {
            return Err(PreconditionError::InvalidAmount.into());
        }
        if !user.can_afford(book.price) {
            tracing::warn!(balance = user.balance, price = book.price, "Insufficient balance");
            return Err(PreconditionError::InsufficientBalance.into());
        }

        let price = book.price;
        let result = self
            .user_repository
            .execute_in_transaction(move |scope| {
                async move {
                    let mut user = scope
                        .lock_user(user_id)
                        .await?
                        .ok_or_else(|| DomainError::not_found("User"))?;
                    user.debit(price)?;

                    scope.save_user(&user).await?;
                    scope
                        .insert_transaction(&Transaction::buy(user_id, book_id, price))
                        .await?;
                    scope
                        .insert_user_book(&UserBook::grant(user_id, book_id))
                        .await?;
                    Ok(user.balance)
                }
                .boxed()
            })
            .await;

        match result {
            Ok(balance) => {
                tracing::info!(price, balance, "Book purchased");
                Ok(())
            }
            Err(DomainError::Precondition(PreconditionError::InsufficientBalance)) => {
                tracing::warn!(price, "Balance drained by a concurrent purchase");
                Err(PreconditionError::InsufficientBalance.into())
            }
            Err(e @ DomainError::NotFound { .. }) => {
                tracing::warn!(error = %e, "User removed before the purchase committed");
                Err(e)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to execute buy");
                Err(DomainError::operation_failed("buy"))
            }
        }
    }
}

impl<U, B> Clone for PurchaseService<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            book_repository: Arc::clone(&self.book_repository),
            span: self.span.clone(),
        }
    }
}
