use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use crabi_adapters::{
    auth::{JwtConfig, generate_auth_token},
    blacklist::MockBlacklistGateway,
    persistence::HashMapUserRepository,
};
use crabi_application::UserService;
use crabi_user_service::UserApi;
use secrecy::Secret;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
    pub jwt_config: JwtConfig,
    pub repository: HashMapUserRepository,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_listed(Vec::<String>::new())
    }

    pub fn with_listed(listed_emails: Vec<impl Into<String>>) -> Self {
        let repository = HashMapUserRepository::new();
        let user_service = UserService::new(
            MockBlacklistGateway::with_listed(listed_emails),
            repository.clone(),
        );
        let jwt_config = JwtConfig {
            jwt_secret: Secret::new("test-secret".to_string()),
            token_ttl_in_seconds: 3600,
        };
        let router = UserApi::new(Arc::new(user_service), jwt_config.clone()).into_router();

        Self {
            router,
            jwt_config,
            repository,
        }
    }

    pub fn token(&self) -> String {
        generate_auth_token("tester@crabi.com", &self.jwt_config).unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value, token: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.header("Token", token);
        }

        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            request = request.header("Token", token);
        }

        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
