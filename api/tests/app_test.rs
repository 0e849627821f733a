//! HTTP tests for the application shell

mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use bs_api::{create_app, middleware::{AuthContext, JwtAuth}};
use serde_json::Value;

use common::TestContext;

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_middleware_injects_auth_context() {
    async fn whoami(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.user_id.to_string())
    }

    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice", "password123", 0).await;
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(ctx.issuer.clone()))
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", ctx.bearer(&alice)))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, alice.id.to_string());
}

#[actix_web::test]
async fn test_auth_context_extractor_without_middleware() {
    async fn whoami(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.user_id.to_string())
    }

    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
