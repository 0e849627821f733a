//! Unit tests for user service

use std::sync::Arc;

use bs_shared::config::auth::MIN_BCRYPT_COST;
use uuid::Uuid;

use crate::domain::entities::UserRole;
use crate::domain::value_objects::{CreateUserInput, UpdateUserRoleInput};
use crate::errors::{DomainError, ErrorKind, PreconditionError, ValidationError};
use crate::repositories::InMemoryUserRepository;
use crate::services::password::PasswordHasher;
use crate::services::user::UserService;

fn service() -> UserService<InMemoryUserRepository> {
    UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        PasswordHasher::new(MIN_BCRYPT_COST),
    )
}

fn input(username: &str) -> CreateUserInput {
    CreateUserInput {
        username: username.to_string(),
        password: "long-enough-password".to_string(),
        role: UserRole::User,
        balance: 1000,
    }
}

#[tokio::test]
async fn test_create_hashes_password() {
    let service = service();
    let user = service.create(input("alice")).await.unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.balance, 1000);
    assert_ne!(user.password_hash, "long-enough-password");
    assert!(PasswordHasher::new(MIN_BCRYPT_COST)
        .verify("long-enough-password", &user.password_hash)
        .unwrap());
}

#[tokio::test]
async fn test_create_rejects_duplicate_username() {
    let service = service();
    service.create(input("alice")).await.unwrap();

    let error = service.create(input("alice")).await.unwrap_err();
    assert_eq!(
        error,
        DomainError::Precondition(PreconditionError::UsernameTaken)
    );
}

#[tokio::test]
async fn test_create_validates_input() {
    let service = service();

    let error = service.create(input("")).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::RequiredField { .. })
    ));

    let error = service.create(input("has space")).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Validation(ValidationError::InvalidFormat { .. })
    ));

    let mut short_password = input("bob");
    short_password.password = "short".to_string();
    let error = service.create(short_password).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ValidationFailed);

    let mut negative = input("carol");
    negative.balance = -1;
    let error = service.create(negative).await.unwrap_err();
    assert_eq!(
        error,
        DomainError::Precondition(PreconditionError::InvalidAmount)
    );

    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lookups_are_repeatable() {
    let service = service();
    let created = service.create(input("dave")).await.unwrap();

    let first = service.find_by_id(created.id).await.unwrap();
    let second = service.find_by_id(created.id).await.unwrap();
    assert_eq!(first, second);

    let by_name = service.find_by_username("dave").await.unwrap();
    assert_eq!(by_name, first);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let service = service();

    let error = service.find_by_id(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(error, DomainError::not_found("User"));

    let error = service.find_by_username("ghost").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_role_and_delete() {
    let service = service();
    let user = service.create(input("erin")).await.unwrap();

    let updated = service
        .update_role(UpdateUserRoleInput {
            user_id: user.id,
            role: UserRole::Admin,
        })
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.balance, user.balance);

    assert!(service.delete(user.id).await.unwrap());
    assert!(!service.delete(user.id).await.unwrap());
    assert!(service.find_all().await.unwrap().is_empty());
}
