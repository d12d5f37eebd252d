//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::sync::Arc;

use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use chrono::Utc;
use gateway::gateway_router;
use platform::bearer::INTERNAL_TOKEN_HEADER;
use platform::config::GatewayConfig;
use platform::upstream::HttpBackend;
use serde_json::{Value, json};
use sharing::{
    InMemoryReportStore, PgSharedReportRepository, SharedReportRepository, SharingConfig,
    sharing_router,
};
use sqlx::postgres::PgPoolOptions;
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
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,gateway=info,sharing=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        app_env = config.app_env.as_str(),
        backend = %config.backend_base_url,
        "Configuration loaded"
    );

    let backend = Arc::new(HttpBackend::new(config.backend_base_url.clone())?);
    let sharing_config = SharingConfig::from_gateway(&config);

    // Shared-report store: Postgres when configured, process memory otherwise
    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let reports = Arc::new(PgSharedReportRepository::new(pool));

            // Startup cleanup: remove expired shared reports
            // Errors here should not prevent server startup
            match reports.cleanup_expired(Utc::now()).await {
                Ok(deleted) => {
                    tracing::info!(
                        reports_deleted = deleted,
                        "Shared report cleanup completed"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Shared report cleanup failed, continuing anyway"
                    );
                }
            }

            build_router(backend, reports, sharing_config)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, shared reports are kept in memory");
            build_router(backend, Arc::new(InMemoryReportStore::new()), sharing_config)
        }
    };

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            http::HeaderName::from_static(INTERNAL_TOKEN_HEADER),
        ]))
        .allow_credentials(true);

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_router<R>(backend: Arc<HttpBackend>, reports: Arc<R>, config: SharingConfig) -> Router
where
    R: SharedReportRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .merge(gateway_router(backend.clone()))
        .merge(sharing_router(backend, reports, config))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
