use std::sync::Arc;

use auth::TokenService;
use schedula_service::config::Config;
use schedula_service::domain::user::ports::UserRepository;
use schedula_service::domain::user::service::AuthService;
use schedula_service::inbound::http::router::create_router;
use schedula_service::outbound::repositories::InMemoryUserRepository;
use schedula_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schedula_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "schedula-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_hours = config.jwt.expiration_hours,
        persistent_store = config.database.url.is_some(),
        "Configuration loaded"
    );

    let token_service = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));

    match &config.database.url {
        Some(database_url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(database_url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
            serve(&config, user_repository, token_service).await?;

            pg_pool.close().await;
            tracing::info!(database = "postgresql", "Database connection pool closed");
        }
        None => {
            tracing::warn!("No database.url configured; users are kept in memory only");
            let user_repository = Arc::new(InMemoryUserRepository::new());
            serve(&config, user_repository, token_service).await?;
        }
    }

    tracing::info!("Server exited successfully");
    Ok(())
}

async fn serve<UR: UserRepository>(
    config: &Config,
    user_repository: Arc<UR>,
    token_service: Arc<TokenService>,
) -> Result<(), anyhow::Error> {
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_service),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_service);
    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
