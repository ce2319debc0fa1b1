use axum::http::StatusCode;
use crabi_core::{Password, UserRepository};
use serde_json::json;

use crate::helpers::{TestApp, body_json};

const USERS: &str = "/api/v1/users/";

fn dua() -> serde_json::Value {
    json!({
        "first_name": "Dua",
        "last_name": "Lipa",
        "email": "dua@lipa.com",
        "password": "dua123lipa"
    })
}

#[tokio::test]
async fn should_return_201_and_hide_the_password() {
    let app = TestApp::new();
    let token = app.token();

    let response = app.post_json(USERS, dua(), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({
            "first_name": "Dua",
            "last_name": "Lipa",
            "email": "dua@lipa.com"
        })
    );

    let stored = app
        .repository
        .get_user_by_email_and_password("dua@lipa.com", &Password::from("dua123lipa"))
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn should_return_401_without_a_token() {
    let app = TestApp::new();

    let response = app.post_json(USERS, dua(), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.repository.get_user_by_email("dua@lipa.com").await.unwrap().is_none());
}

#[tokio::test]
async fn should_return_401_with_a_forged_token() {
    let app = TestApp::new();

    let response = app.post_json(USERS, dua(), Some("forged.token.value")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_400_naming_the_first_empty_field() {
    let app = TestApp::new();
    let token = app.token();

    let cases = [
        (json!({}), "user's first name should not be empty"),
        (
            json!({ "first_name": "Dua" }),
            "user's last name should not be empty",
        ),
        (
            json!({ "first_name": "Dua", "last_name": "Lipa", "password": "pw" }),
            "user's email should not be empty",
        ),
        (
            json!({ "first_name": "Dua", "last_name": "Lipa", "email": "dua@lipa.com" }),
            "user's password should not be empty",
        ),
    ];

    for (body, message) in cases {
        let response = app.post_json(USERS, body, Some(&token)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": message }));
    }
}

#[tokio::test]
async fn should_return_403_for_a_blacklisted_person() {
    let app = TestApp::with_listed(vec!["dua@lipa.com"]);
    let token = app.token();

    let response = app.post_json(USERS, dua(), Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "user was found in pld blacklist" })
    );
    assert!(app.repository.get_user_by_email("dua@lipa.com").await.unwrap().is_none());
}

#[tokio::test]
async fn should_return_409_for_an_existing_email() {
    let app = TestApp::new();
    let token = app.token();

    let first = app.post_json(USERS, dua(), Some(&token)).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.post_json(USERS, dua(), Some(&token)).await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(second).await,
        json!({ "error": "user with email dua@lipa.com already exists" })
    );
}
