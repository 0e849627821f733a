//! HTTP tests for POST /api/v1/books/{book_id}/buy

mod common;

use actix_web::{http::StatusCode, test};
use bs_api::create_app;
use bs_core::UserRepository;
use serde_json::{json, Value};
use uuid::Uuid;

use common::TestContext;

#[actix_web::test]
async fn test_buy_requires_token() {
    let ctx = TestContext::new();
    let book = ctx.seed_book("Dune", 400).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/books/{}/buy", book.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/books/{}/buy", book.id))
        .insert_header(("Authorization", "Bearer invalid-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_buy_debits_the_token_holder() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice", "password123", 1000).await;
    let book = ctx.seed_book("Dune", 400).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/books/{}/buy", book.id))
        .insert_header(("Authorization", ctx.bearer(&alice)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    let stored = ctx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(stored.balance, 600);
    assert_eq!(ctx.users.transactions().await.len(), 1);
    assert_eq!(ctx.users.user_books().await.len(), 1);
}

#[actix_web::test]
async fn test_buy_with_insufficient_balance() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice", "password123", 100).await;
    let book = ctx.seed_book("Dune", 400).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/books/{}/buy", book.id))
        .insert_header(("Authorization", ctx.bearer(&alice)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INSUFFICIENT_BALANCE");

    let stored = ctx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(stored.balance, 100);
    assert!(ctx.users.transactions().await.is_empty());
}

#[actix_web::test]
async fn test_buy_unknown_book() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice", "password123", 100).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/books/{}/buy", Uuid::new_v4()))
        .insert_header(("Authorization", ctx.bearer(&alice)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_failed_unit_of_work_is_reported_generically() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice", "password123", 1000).await;
    let book = ctx.seed_book("Dune", 400).await;
    ctx.users.fail_next_ledger_insert();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/books/{}/buy", book.id))
        .insert_header(("Authorization", ctx.bearer(&alice)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "OPERATION_FAILED");
    assert_eq!(body["message"], "Failed to execute buy");

    let stored = ctx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(stored.balance, 1000);
}
