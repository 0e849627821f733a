//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`]; both the binary
//! and the HTTP tests go through [`create_app`].

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use bs_core::{BookRepository, UserRepository};
use bs_shared::{error_codes, ErrorResponse, HealthResponse};

use crate::middleware::JwtAuth;
use crate::routes::{auth, books, users};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, B>(
    app_state: web::Data<AppState<U, B>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    B: BookRepository + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.token_issuer.clone());
    let json_config = web::JsonConfig::default()
        .limit(app_state.max_payload_size)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string()));
            InternalError::from_response(err, response).into()
        });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string()));
        InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(path_config)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(web::scope("/auth").route("/login", web::post().to(auth::login::<U, B>)))
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create_user::<U, B>))
                        .route("", web::get().to(users::list_users::<U, B>))
                        .route(
                            "/by-username/{username}",
                            web::get().to(users::get_user_by_username::<U, B>),
                        )
                        .route("/{id}", web::get().to(users::get_user::<U, B>))
                        .route("/{id}", web::delete().to(users::delete_user::<U, B>))
                        .route("/{id}/role", web::patch().to(users::update_role::<U, B>)),
                )
                .service(
                    web::scope("/books")
                        .wrap(jwt_auth)
                        .route("/{book_id}/buy", web::post().to(books::buy::<U, B>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "bookshop-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
