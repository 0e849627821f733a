use actix_web::{web, HttpResponse};
use validator::Validate;

use bs_core::{BookRepository, UserRepository};

use crate::dto::CreateUserRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/v1/users
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "password123", "role": "user", "balance": 1000 }
/// ```
///
/// `role` defaults to `user` and `balance` to 0.
///
/// ## Errors
/// - 400 Bad Request: Invalid username, password or balance
/// - 409 Conflict: Username already taken
pub async fn create_user<U, B>(
    state: web::Data<AppState<U, B>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.user_service.create(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => handle_domain_error(&e),
    }
}
