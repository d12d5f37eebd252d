//! Router Configuration

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use super::handlers::{self, SharingBackend, SharingState};
use crate::application::SharingConfig;
use crate::domain::repository::SharedReportRepository;

/// Public-session and shared-report routes
pub fn sharing_router<B, R>(backend: Arc<B>, reports: Arc<R>, config: SharingConfig) -> Router
where
    B: SharingBackend,
    R: SharedReportRepository + Send + Sync + 'static,
{
    let state = SharingState::new(backend, reports, config);

    Router::new()
        .route("/api/v0/public-sessions", post(handlers::create_session::<B, R>))
        .route("/api/v0/public/session", get(handlers::session::<B, R>))
        .route("/api/v0/public/campaign", get(handlers::campaign::<B, R>))
        .route(
            "/api/v0/public/comments",
            get(handlers::comments::<B, R>).post(handlers::post_comment::<B, R>),
        )
        .route(
            "/api/v0/public/price-negotiations",
            get(handlers::price_negotiations::<B, R>).post(handlers::respond_to_price::<B, R>),
        )
        .route("/api/v0/shared-reports", post(handlers::share_report::<B, R>))
        .route(
            "/api/v0/shared-reports/{campaign_id}",
            get(handlers::open_report::<B, R>),
        )
        .with_state(state)
}
