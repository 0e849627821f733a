use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bs_core::{BookRepository, UserRepository};

use crate::dto::PurchaseResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/books/{book_id}/buy
///
/// The buyer is always the authenticated user; there is no way to buy on
/// behalf of someone else.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid bearer token
/// - 404 Not Found: User or book does not exist
/// - 422 Unprocessable Entity: Balance does not cover the price
/// - 500 Internal Server Error: Nothing was written
pub async fn buy<U, B>(
    state: web::Data<AppState<U, B>>,
    auth: AuthContext,
    book_id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    match state
        .purchase_service
        .buy(auth.user_id, book_id.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(PurchaseResponse { success: true }),
        Err(e) => handle_domain_error(&e),
    }
}
