use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bs_core::{BookRepository, UserRepository};

use crate::handlers::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /api/v1/users
pub async fn list_users<U, B>(state: web::Data<AppState<U, B>>) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    match state.user_service.find_all().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<U, B>(
    state: web::Data<AppState<U, B>>,
    id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    match state.user_service.find_by_id(id.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => handle_domain_error(&e),
    }
}

/// Handler for GET /api/v1/users/by-username/{username}
pub async fn get_user_by_username<U, B>(
    state: web::Data<AppState<U, B>>,
    username: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    match state.user_service.find_by_username(&username).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => handle_domain_error(&e),
    }
}
