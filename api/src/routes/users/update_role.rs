use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bs_core::{BookRepository, UpdateUserRoleInput, UserRepository};

use crate::dto::UpdateRoleRequest;
use crate::handlers::handle_domain_error;
use crate::state::AppState;

/// Handler for PATCH /api/v1/users/{id}/role
///
/// Returns the updated user, or 404 when the id is unknown.
pub async fn update_role<U, B>(
    state: web::Data<AppState<U, B>>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateRoleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let input = UpdateUserRoleInput {
        user_id: id.into_inner(),
        role: request.role,
    };

    match state.user_service.update_role(input).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => handle_domain_error(&e),
    }
}
