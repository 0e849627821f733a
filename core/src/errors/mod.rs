//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, PreconditionError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// `Internal` carries storage or hashing details and is raised only by
/// repositories and leaf components. Services log it and replace it with
/// `OperationFailed` before returning to their callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Failed to execute {operation}")]
    OperationFailed { operation: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coarse failure category, stable across message changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidCredentials,
    InvalidToken,
    PreconditionFailed,
    ValidationFailed,
    OperationFailed,
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn operation_failed(operation: impl Into<String>) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Category of this error
    ///
    /// `Internal` reports as `OperationFailed` since callers may only ever
    /// see the generic kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Auth(_) => ErrorKind::InvalidCredentials,
            Self::Token(_) => ErrorKind::InvalidToken,
            Self::Precondition(_) => ErrorKind::PreconditionFailed,
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::OperationFailed { .. } | Self::Internal { .. } => ErrorKind::OperationFailed,
        }
    }

    /// Whether this is an expected domain outcome rather than a fault
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Internal { .. } | Self::OperationFailed { .. })
    }

    /// Surface expected failures unchanged and hide everything else
    ///
    /// Unexpected failures are logged with their cause at error level and
    /// replaced by a generic `OperationFailed` for `operation`.
    pub fn at_boundary(self, operation: &str) -> Self {
        if self.is_expected() {
            self
        } else {
            tracing::error!(operation, error = %self, "Failed to execute {operation}");
            Self::operation_failed(operation)
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(DomainError::not_found("User").kind(), ErrorKind::NotFound);
        assert_eq!(
            DomainError::from(AuthError::InvalidCredentials).kind(),
            ErrorKind::InvalidCredentials
        );
        assert_eq!(
            DomainError::from(PreconditionError::InsufficientBalance).kind(),
            ErrorKind::PreconditionFailed
        );
        assert_eq!(DomainError::internal("boom").kind(), ErrorKind::OperationFailed);
    }

    #[test]
    fn test_boundary_hides_internal_details() {
        let error = DomainError::internal("Deadlock found when trying to get lock").at_boundary("buy");
        assert_eq!(error, DomainError::operation_failed("buy"));
        assert_eq!(error.to_string(), "Failed to execute buy");
    }

    #[test]
    fn test_boundary_keeps_expected_failures() {
        let error = DomainError::from(PreconditionError::UsernameTaken).at_boundary("create");
        assert_eq!(error, DomainError::Precondition(PreconditionError::UsernameTaken));

        let error = DomainError::not_found("Book").at_boundary("buy");
        assert_eq!(error.to_string(), "Book not found");
    }
}
