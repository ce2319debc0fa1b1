use axum::http::StatusCode;
use crabi_adapters::auth::validate_auth_token;
use crabi_core::{User, UserRepository};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::FirstName, name::en::LastName},
};
use serde_json::json;

use crate::helpers::{TestApp, body_json};

const LOGIN: &str = "/api/v1/login/";

async fn seeded_app() -> (TestApp, User) {
    let app = TestApp::new();
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let email: String = SafeEmail().fake();
    let user = User::new(first_name, last_name, email, "p4ssw0rd");
    app.repository.save_user(user.clone()).await.unwrap();
    (app, user)
}

#[tokio::test]
async fn should_return_200_and_a_token_for_valid_credentials() {
    let (app, user) = seeded_app().await;

    let response = app
        .post_json(
            LOGIN,
            json!({ "email": user.email(), "password": "p4ssw0rd" }),
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let token = response
        .headers()
        .get("Token")
        .expect("login response carries a token")
        .to_str()
        .unwrap()
        .to_owned();
    let claims = validate_auth_token(&token, &app.jwt_config).unwrap();
    assert_eq!(claims.sub, user.email());

    assert_eq!(
        body_json(response).await,
        json!({
            "first_name": user.first_name(),
            "last_name": user.last_name(),
            "email": user.email()
        })
    );
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let (app, user) = seeded_app().await;

    let wrong_password = app
        .post_json(
            LOGIN,
            json!({ "email": user.email(), "password": "nope" }),
            None,
        )
        .await;
    let unknown_email = app
        .post_json(
            LOGIN,
            json!({ "email": "nobody@crabi.com", "password": "p4ssw0rd" }),
            None,
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert!(wrong_password.headers().get("Token").is_none());

    let expected = json!({ "error": "user not exists or invalid credentials" });
    assert_eq!(body_json(wrong_password).await, expected);
    assert_eq!(body_json(unknown_email).await, expected);
}

#[tokio::test]
async fn should_return_400_for_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(LOGIN, json!({ "password": "p4ssw0rd" }), None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "user's email should not be empty" })
    );

    let response = app
        .post_json(LOGIN, json!({ "email": "dua@lipa.com" }), None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "user's password should not be empty" })
    );
}
