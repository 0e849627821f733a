//! # Bookshop Core
//!
//! Core business logic and domain layer for the Bookshop backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Book, Claims, Transaction, TransactionAction, User, UserBook, UserRole};
pub use domain::value_objects::{CreateUserInput, LoginResponse, UpdateUserRoleInput};
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorKind, PreconditionError, TokenError,
    ValidationError,
};
pub use repositories::{
    BookRepository, InMemoryBookRepository, InMemoryUserRepository, TransactionScope,
    UserRepository,
};
pub use services::{
    AuthService, PasswordHasher, PurchaseService, TokenIssuer, TokenIssuerConfig, UserService,
};
