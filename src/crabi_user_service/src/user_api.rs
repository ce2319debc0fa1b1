use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method},
    middleware,
    routing::{get, post},
};
use crabi_adapters::{
    auth::{JwtConfig, require_token},
    config::TOKEN_HEADER,
    http::{
        paths,
        routes::{create_user, get_user, login},
    },
};
use crabi_application::UserService;
use crabi_core::{BlacklistGateway, UserRepository};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the user service
pub struct UserApi {
    router: Router,
}

impl UserApi {
    /// Create a new UserApi around an already-built user service
    ///
    /// # Arguments
    /// * `user_service` - Service shared by every route
    /// * `jwt_config` - Secret and lifetime of issued tokens
    ///
    /// # Note
    /// User creation and lookup sit behind the token check; login does not.
    pub fn new<B, R>(user_service: Arc<UserService<B, R>>, jwt_config: JwtConfig) -> Self
    where
        B: BlacklistGateway + 'static,
        R: UserRepository + 'static,
    {
        let router = Router::new()
            .route(paths::USERS, post(create_user::<B, R>))
            .route(paths::USER_BY_EMAIL, get(get_user::<B, R>))
            .route_layer(middleware::from_fn_with_state(
                jwt_config.clone(),
                require_token,
            ))
            .with_state(user_service.clone())
            .route(paths::LOGIN, post(login::<B, R>))
            .with_state((user_service, jwt_config));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    fn with_cors_layer(mut self) -> Self {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods([
                Method::GET,
                Method::DELETE,
                Method::PUT,
                Method::POST,
                Method::OPTIONS,
            ])
            .expose_headers([HeaderName::from_static(TOKEN_HEADER)]);

        self.router = self.router.layer(cors);
        self
    }

    /// Convert the UserApi into a router that can be nested into another application
    pub fn into_router(self) -> Router {
        self.with_cors_layer().with_trace_layer().router
    }

    /// Run the user API as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("User service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
