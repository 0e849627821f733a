//! Mapping of domain failures onto HTTP responses
//!
//! Internal causes never reach the response body; they are logged by the
//! services before they are reduced to `OperationFailed`.

use actix_web::{http::StatusCode, HttpResponse};
use bs_core::{AuthError, DomainError, PreconditionError, TokenError};
use bs_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Convert a `DomainError` into an HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = match error {
        DomainError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, error.to_string())
        }
        DomainError::Auth(AuthError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_CREDENTIALS,
            error.to_string(),
        ),
        DomainError::Auth(AuthError::MissingToken) => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            error.to_string(),
        ),
        DomainError::Token(TokenError::Expired) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_EXPIRED,
            error.to_string(),
        ),
        DomainError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_INVALID,
            String::from("Invalid token"),
        ),
        DomainError::Precondition(PreconditionError::UsernameTaken) => (
            StatusCode::CONFLICT,
            error_codes::USERNAME_TAKEN,
            error.to_string(),
        ),
        DomainError::Precondition(PreconditionError::InsufficientBalance) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::INSUFFICIENT_BALANCE,
            error.to_string(),
        ),
        DomainError::Precondition(PreconditionError::InvalidAmount) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            error_codes::PRECONDITION_FAILED,
            error.to_string(),
        ),
        DomainError::Validation(_) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            error.to_string(),
        ),
        DomainError::OperationFailed { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::OPERATION_FAILED,
            error.to_string(),
        ),
        // Services never let this through; keep the detail out of the body anyway
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::OPERATION_FAILED,
            String::from("The operation could not be completed"),
        ),
    };

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// 400 response listing the offending fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }

    HttpResponse::BadRequest().json(response)
}
