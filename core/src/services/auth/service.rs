//! Main authentication service implementation

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{instrument, Span};

use crate::domain::value_objects::LoginResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenIssuer;

/// Password hashed once to give unknown usernames a digest to check against
const DUMMY_PASSWORD: &str = "bookshop-dummy-password";

/// Authentication service for credential checks and token issuance
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Token issuer for JWT minting
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
    /// Digest of `DUMMY_PASSWORD` at the configured cost, computed on first use
    dummy_digest: Arc<OnceCell<String>>,
    span: Span,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_issuer` - Issuer for access tokens
    /// * `password_hasher` - Hasher used to check stored digests
    pub fn new(
        user_repository: Arc<U>,
        token_issuer: Arc<TokenIssuer>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            token_issuer,
            password_hasher,
            dummy_digest: Arc::new(OnceCell::new()),
            span: tracing::info_span!("auth_service"),
        }
    }

    /// Attach log output of this service to `span`
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Validate credentials and issue an access token
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// `AuthError::InvalidCredentials`, and both pay for one bcrypt
    /// verification so response time does not reveal which it was.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - Token and the configured expiry in seconds
    /// * `Err(DomainError::Auth)` - Credentials rejected
    /// * `Err(DomainError::OperationFailed)` - Lookup or signing failed
    #[instrument(parent = &self.span, skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginResponse> {
        self.check_credentials(username, password)
            .await
            .map_err(|e| e.at_boundary("login"))
    }

    async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> DomainResult<LoginResponse> {
        let Some(user) = self.user_repository.find_by_username(username).await? else {
            self.verify_against_dummy(password).await;
            tracing::warn!(username, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = match self
            .password_hasher
            .verify_blocking(password.to_string(), user.password_hash.clone())
            .await
        {
            Ok(matches) => matches,
            Err(e) => {
                // An unreadable digest still looks like bad credentials to the caller
                tracing::error!(user_id = %user.id, error = %e, "Stored password digest is unusable");
                false
            }
        };

        if !matches {
            tracing::warn!(username, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self
            .token_issuer
            .sign(user.id)
            .map_err(|e| DomainError::internal(e.to_string()))?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse::new(access_token, self.token_issuer.expires_in()))
    }

    #[cfg(test)]
    pub(crate) fn dummy_digest(&self) -> Option<&String> {
        self.dummy_digest.get()
    }

    /// Spend the same bcrypt work a real verification would; the outcome is ignored
    async fn verify_against_dummy(&self, password: &str) {
        let hasher = self.password_hasher;
        let digest = self
            .dummy_digest
            .get_or_try_init(|| hasher.hash_blocking(DUMMY_PASSWORD.to_string()))
            .await;

        match digest {
            Ok(digest) => {
                let _ = hasher
                    .verify_blocking(password.to_string(), digest.clone())
                    .await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to prepare dummy password digest"),
        }
    }
}

impl<U> Clone for AuthService<U>
where
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            token_issuer: Arc::clone(&self.token_issuer),
            password_hasher: self.password_hasher,
            dummy_digest: Arc::clone(&self.dummy_digest),
            span: self.span.clone(),
        }
    }
}
