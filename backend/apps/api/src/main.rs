//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Json, Router,
    extract::State,
    http::{self, HeaderName, Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use profile::{AuthConfig, Database, DatabaseConfig, PgProfileRepository, profile_router};
use serde_json::{Value, json};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,profile=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection; failure ends startup, no retry
    let db_config = DatabaseConfig::from_env()?;
    let db = match Database::connect(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed");
            return Err(e.into());
        }
    };

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(db.pool())
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = load_auth_config()?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
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
            HeaderName::from_static("x-auth-token"),
        ]))
        .allow_credentials(true);

    // Build router
    let health = Router::new()
        .route("/health", get(health_check))
        .with_state(db.clone());

    let app = Router::new()
        .nest(
            "/api/profile",
            profile_router(PgProfileRepository::new(db.pool().clone()), auth_config),
        )
        .merge(health)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;

    Ok(())
}

/// Token settings. Release builds require `JWT_SECRET` (base64, 32+ bytes);
/// debug builds fall back to a per-process random secret.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("JWT_SECRET") {
        Ok(secret_b64) => {
            let jwt_secret = general_purpose::STANDARD
                .decode(secret_b64.trim())
                .context("JWT_SECRET must be base64")?;
            anyhow::ensure!(
                jwt_secret.len() >= 32,
                "JWT_SECRET must decode to at least 32 bytes"
            );
            AuthConfig {
                jwt_secret,
                ..AuthConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random development secret");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("JWT_SECRET must be set in production"),
    };

    if let Some(ttl) = env::var("JWT_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        config.token_ttl = Duration::from_secs(ttl);
    }

    Ok(config)
}

/// GET /health
async fn health_check(State(db): State<Database>) -> AppResult<Json<Value>> {
    db.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
