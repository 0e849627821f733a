//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use bs_api::AppState;
use bs_core::{
    Book, InMemoryBookRepository, InMemoryUserRepository, PasswordHasher, TokenIssuer,
    TokenIssuerConfig, User, UserRole,
};

pub type TestState = AppState<InMemoryUserRepository, InMemoryBookRepository>;

pub struct TestContext {
    pub users: Arc<InMemoryUserRepository>,
    pub books: Arc<InMemoryBookRepository>,
    pub issuer: Arc<TokenIssuer>,
    pub hasher: PasswordHasher,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let books = Arc::new(InMemoryBookRepository::new());
        let issuer = Arc::new(TokenIssuer::new(TokenIssuerConfig::default()));
        // Lowest cost keeps the tests fast
        let hasher = PasswordHasher::new(4);

        let state = web::Data::new(AppState::new(
            Arc::clone(&users),
            Arc::clone(&books),
            Arc::clone(&issuer),
            hasher,
        ));

        Self {
            users,
            books,
            issuer,
            hasher,
            state,
        }
    }

    /// Store a user with a hashed password directly in the repository
    pub async fn seed_user(&self, username: &str, password: &str, balance: i64) -> User {
        let hash = self.hasher.hash(password).unwrap();
        let user = User::new(username.to_string(), hash, UserRole::User, balance);
        self.users.insert(user.clone()).await;
        user
    }

    pub async fn seed_book(&self, title: &str, price: i64) -> Book {
        let book = Book::new(title.to_string(), price);
        self.books.insert(book.clone()).await;
        book
    }

    pub fn bearer(&self, user: &User) -> String {
        format!("Bearer {}", self.issuer.sign(user.id).unwrap())
    }
}
