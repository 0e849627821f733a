use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bs_core::{BookRepository, UserRepository};

use crate::dto::DeleteResponse;
use crate::handlers::handle_domain_error;
use crate::state::AppState;

/// Handler for DELETE /api/v1/users/{id}
///
/// Deleting an unknown id is not an error; it reports `{"deleted": false}`.
pub async fn delete_user<U, B>(
    state: web::Data<AppState<U, B>>,
    id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    match state.user_service.delete(id.into_inner()).await {
        Ok(deleted) => HttpResponse::Ok().json(DeleteResponse { deleted }),
        Err(e) => handle_domain_error(&e),
    }
}
