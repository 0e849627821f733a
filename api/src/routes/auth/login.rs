use actix_web::{web, HttpResponse};
use validator::Validate;

use bs_core::{BookRepository, UserRepository};

use crate::dto::LoginRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "password123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJ...", "expires_in": 3600 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Unknown user or wrong password, indistinguishably
pub async fn login<U, B>(
    state: web::Data<AppState<U, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_domain_error(&e),
    }
}
