use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use crabi::{
    BlacklistGateway, ExposeSecret, GrpcBlacklistGateway, HttpBlacklistGateway, JwtConfig,
    PostgresUserRepository, Settings, UserApi, UserService, get_postgres_pool,
};
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    dotenvy::dotenv().ok();
    let settings = Settings::load().wrap_err("failed to set up configuration")?;

    let pg_pool = get_postgres_pool(settings.postgres.url.expose_secret())
        .await
        .wrap_err("failed to setup postgres pool")?;
    PostgresUserRepository::run_migrations(&pg_pool)
        .await
        .wrap_err("failed to run migrations")?;
    let user_repository = PostgresUserRepository::new(pg_pool);

    let blacklist_gateway: Arc<dyn BlacklistGateway> = if settings.pld.uses_grpc() {
        Arc::new(
            GrpcBlacklistGateway::connect_lazy(&settings.pld.grpc_endpoint(), settings.pld.timeout())
                .wrap_err("failed to setup pld client")?,
        )
    } else {
        let http_client = HttpClient::builder()
            .timeout(settings.pld.timeout())
            .build()
            .wrap_err("failed to setup pld client")?;
        Arc::new(HttpBlacklistGateway::new(settings.pld.http_url(), http_client))
    };

    let user_service = UserService::builder()
        .blacklist_gateway(blacklist_gateway)
        .user_repository(user_repository)
        .build()
        .wrap_err("failed to setup user service")?;

    let user_api = UserApi::new(Arc::new(user_service), JwtConfig::from(&settings.jwt));

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting crabi user service...");

    user_api.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
