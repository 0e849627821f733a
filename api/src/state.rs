//! Shared application state handed to every handler

use std::sync::Arc;

use bs_core::{
    AuthService, BookRepository, PasswordHasher, PurchaseService, TokenIssuer, UserRepository,
    UserService,
};

/// Application state that holds shared services
pub struct AppState<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U>>,
    pub purchase_service: Arc<PurchaseService<U, B>>,
    /// Used by the bearer-token middleware
    pub token_issuer: Arc<TokenIssuer>,
    /// Upper bound for JSON request bodies, in bytes
    pub max_payload_size: usize,
}

impl<U, B> AppState<U, B>
where
    U: UserRepository,
    B: BookRepository,
{
    /// Wire the services around one pair of repositories
    pub fn new(
        user_repository: Arc<U>,
        book_repository: Arc<B>,
        token_issuer: Arc<TokenIssuer>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&user_repository),
                Arc::clone(&token_issuer),
                password_hasher,
            )),
            user_service: Arc::new(UserService::new(
                Arc::clone(&user_repository),
                password_hasher,
            )),
            purchase_service: Arc::new(PurchaseService::new(user_repository, book_repository)),
            token_issuer,
            max_payload_size: 64 * 1024,
        }
    }

    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = max_payload_size;
        self
    }
}
