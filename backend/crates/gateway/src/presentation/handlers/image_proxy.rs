//! Image proxy handler - unauthenticated, `{error}` failures

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::ImageProxyService;
use crate::presentation::extract::{QueryParams, param};
use crate::presentation::response::respond;

const STYLE: ErrorStyle = ErrorStyle::ErrorOnly;

const CACHE_CONTROL: &str = "public, max-age=86400";

/// GET /api/v0/image-proxy?url=
pub async fn fetch<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(STYLE, async move {
        let url = param(&params, "url").unwrap_or_default();
        let media = ImageProxyService::new(state.backend).fetch(url).await?;

        // The fetcher only hands back media it already checked is an image
        let content_type = media.content_type.unwrap_or_default();

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, CACHE_CONTROL.to_string()),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
            ],
            media.body,
        )
            .into_response())
    })
    .await
}
