use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use crabi_core::{User, UserRepository};
use serde_json::json;

use crate::helpers::{TestApp, body_json};

#[tokio::test]
async fn should_return_the_user_without_password() {
    let app = TestApp::new();
    app.repository
        .save_user(User::new("Dua", "Lipa", "a@b.com", "dua123lipa"))
        .await
        .unwrap();
    let token = app.token();

    let response = app.get("/api/v1/users/a@b.com", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "first_name": "Dua",
            "last_name": "Lipa",
            "email": "a@b.com"
        })
    );
}

#[tokio::test]
async fn should_return_404_for_an_unknown_email() {
    let app = TestApp::new();
    let token = app.token();

    let response = app.get("/api/v1/users/missing@x.com", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "user not exists" }));
}

#[tokio::test]
async fn should_return_401_without_a_token() {
    let app = TestApp::new();

    let response = app.get("/api/v1/users/a@b.com", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/users/a@b.com")
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
