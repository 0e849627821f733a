//! User management service implementation

use std::sync::Arc;

use bs_shared::validation::{
    self, validators, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use tracing::{instrument, Span};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::{CreateUserInput, UpdateUserRoleInput};
use crate::errors::{DomainError, DomainResult, PreconditionError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

/// Service for user account management
///
/// Every public method hides storage failures behind
/// `DomainError::OperationFailed` after logging them.
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
    password_hasher: PasswordHasher,
    span: Span,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>, password_hasher: PasswordHasher) -> Self {
        Self {
            user_repository,
            password_hasher,
            span: tracing::info_span!("user_service"),
        }
    }

    /// Attach log output of this service to `span`
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.user_repository
            .find_all()
            .await
            .map_err(|e| e.at_boundary("findAll"))
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await
            .and_then(|user| user.ok_or_else(|| DomainError::not_found("User")))
            .map_err(|e| e.at_boundary("findById"))
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn find_by_username(&self, username: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_username(username)
            .await
            .and_then(|user| user.ok_or_else(|| DomainError::not_found("User")))
            .map_err(|e| e.at_boundary("findByUsername"))
    }

    /// Register a new user
    ///
    /// The password is hashed before it reaches the repository.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Validation)` - Malformed username or password
    /// * `Err(DomainError::Precondition)` - Username taken or negative balance
    #[instrument(parent = &self.span, skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: CreateUserInput) -> DomainResult<User> {
        validate_new_user(&input)?;

        let result = async {
            let password_hash = self
                .password_hasher
                .hash_blocking(input.password.clone())
                .await?;
            self.user_repository.create(password_hash, &input).await
        }
        .await;

        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "User created");
                Ok(user)
            }
            Err(e) => Err(e.at_boundary("create")),
        }
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn update_role(&self, input: UpdateUserRoleInput) -> DomainResult<User> {
        self.user_repository
            .update_role(input)
            .await
            .map_err(|e| e.at_boundary("updateRole"))
    }

    /// Delete a user, reporting whether one existed
    #[instrument(parent = &self.span, skip(self))]
    pub async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        self.user_repository
            .delete(id)
            .await
            .map_err(|e| e.at_boundary("delete"))
    }
}

impl<U> Clone for UserService<U>
where
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            password_hasher: self.password_hasher,
            span: self.span.clone(),
        }
    }
}

fn validate_new_user(input: &CreateUserInput) -> DomainResult<()> {
    if !validators::not_empty(&input.username) {
        return Err(ValidationError::RequiredField {
            field: "username".to_string(),
        }
        .into());
    }
    if !validators::length_between(&input.username, USERNAME_MIN_LEN, USERNAME_MAX_LEN) {
        return Err(ValidationError::InvalidLength {
            field: "username".to_string(),
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        }
        .into());
    }
    if !validation::is_valid_username(&input.username) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
        }
        .into());
    }
    if input.password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        }
        .into());
    }
    if !validation::is_valid_password(&input.password) {
        return Err(ValidationError::InvalidLength {
            field: "password".to_string(),
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        }
        .into());
    }
    if input.balance < 0 {
        return Err(PreconditionError::InvalidAmount.into());
    }
    Ok(())
}
