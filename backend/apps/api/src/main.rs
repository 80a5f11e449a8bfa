//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod settings;

use auth::PgAuthRepository;
use auth::middleware::{AuthMiddlewareState, require_auth_session};
use axum::{
    Router,
    http::{Method, header},
    middleware,
};
use home::PgHomeRepository;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "realty_api=info,auth=info,home=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Errors here should not prevent server startup
    let auth_repo = PgAuthRepository::new(pool.clone());
    if let Err(e) = auth_repo.cleanup_expired().await {
        tracing::warn!(
            error = %e,
            "Auth session cleanup failed, continuing anyway"
        );
    }

    let home_repo = PgHomeRepository::new(pool.clone());

    // Protected listing routes resolve the bearer token into a Principal first
    let session_layer = middleware::from_fn_with_state(
        AuthMiddlewareState::new(auth_repo.clone(), settings.auth.clone()),
        require_auth_session::<PgAuthRepository>,
    );
    let homes = home::public_home_router(home_repo.clone())
        .merge(home::protected_home_router(home_repo).route_layer(session_layer));

    let cors = CorsLayer::new()
        .allow_origin(settings.allowed_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth::auth_router(auth_repo, settings.auth))
        .nest("/api/homes", homes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
