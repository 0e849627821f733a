//! Unit tests for the in-memory user repository

use futures_util::FutureExt;
use uuid::Uuid;

use crate::domain::entities::{Transaction, User, UserBook, UserRole};
use crate::domain::value_objects::{CreateUserInput, UpdateUserRoleInput};
use crate::errors::{DomainError, PreconditionError};
use crate::repositories::user::{InMemoryUserRepository, TransactionScope, UserRepository};

fn input(username: &str) -> CreateUserInput {
    CreateUserInput {
        username: username.to_string(),
        password: "ignored-by-store".to_string(),
        role: UserRole::User,
        balance: 500,
    }
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryUserRepository::new();

    let created = repo.create("digest".to_string(), &input("alice")).await.unwrap();
    assert_eq!(created.password_hash, "digest");
    assert_eq!(created.balance, 500);

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id, Some(created.clone()));

    let by_name = repo.find_by_username("alice").await.unwrap();
    assert_eq!(by_name, Some(created));

    assert!(repo.find_by_username("bob").await.unwrap().is_none());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create("digest".to_string(), &input("alice")).await.unwrap();

    let result = repo.create("other".to_string(), &input("alice")).await;
    assert_eq!(
        result,
        Err(DomainError::Precondition(PreconditionError::UsernameTaken))
    );
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_role_and_delete() {
    let repo = InMemoryUserRepository::new();
    let user = repo.create("digest".to_string(), &input("carol")).await.unwrap();

    let updated = repo
        .update_role(UpdateUserRoleInput {
            user_id: user.id,
            role: UserRole::Admin,
        })
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Admin);

    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());

    let missing = repo
        .update_role(UpdateUserRoleInput {
            user_id: user.id,
            role: UserRole::User,
        })
        .await;
    assert_eq!(missing, Err(DomainError::not_found("User")));
}

#[tokio::test]
async fn test_unit_of_work_commits_all_writes() {
    let repo = InMemoryUserRepository::new();
    let user = User::new("dave".to_string(), "digest".to_string(), UserRole::User, 100);
    repo.insert(user.clone()).await;
    let book_id = Uuid::new_v4();
    let user_id = user.id;

    repo.execute_in_transaction(move |scope| {
        async move {
            let mut locked = scope.lock_user(user_id).await?.unwrap();
            locked.debit(40)?;
            scope.save_user(&locked).await?;
            scope.insert_transaction(&Transaction::buy(user_id, book_id, 40)).await?;
            scope.insert_user_book(&UserBook::grant(user_id, book_id)).await
        }
        .boxed()
    })
    .await
    .unwrap();

    assert_eq!(repo.find_by_id(user_id).await.unwrap().unwrap().balance, 60);
    assert_eq!(repo.transactions().await.len(), 1);
    assert_eq!(repo.user_books().await.len(), 1);
}

#[tokio::test]
async fn test_unit_of_work_rolls_back_on_error() {
    let repo = InMemoryUserRepository::new();
    let user = User::new("erin".to_string(), "digest".to_string(), UserRole::User, 100);
    repo.insert(user.clone()).await;
    repo.fail_next_ledger_insert();
    let user_id = user.id;

    let result = repo
        .execute_in_transaction(move |scope| {
            async move {
                let mut locked = scope.lock_user(user_id).await?.unwrap();
                locked.debit(40)?;
                scope.save_user(&locked).await?;
                scope
                    .insert_transaction(&Transaction::buy(user_id, Uuid::new_v4(), 40))
                    .await
            }
            .boxed()
        })
        .await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(repo.find_by_id(user_id).await.unwrap().unwrap().balance, 100);
    assert!(repo.transactions().await.is_empty());
}
