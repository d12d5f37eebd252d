//! OAuth handlers - bare payloads, `{error}` failures

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::oauth::{OAuthCallbackRequest, OAuthProvider};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::OAuthService;
use crate::presentation::extract::{parse_body, require_bearer};
use crate::presentation::response::{bare, respond};

const STYLE: ErrorStyle = ErrorStyle::ErrorOnly;

/// GET /api/v0/oauth/{provider}/authorize-url
pub async fn authorize_url<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(provider): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let provider: OAuthProvider = provider.parse()?;

        let url = OAuthService::new(state.backend)
            .authorize_url(&token, provider)
            .await?;
        Ok(bare(StatusCode::OK, url))
    })
    .await
}

/// POST /api/v0/oauth/{provider}/callback
pub async fn callback<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(provider): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let provider: OAuthProvider = provider.parse()?;
        let request: OAuthCallbackRequest = parse_body(&body)?;
        let forward = request.into_forward()?;

        let connection = OAuthService::new(state.backend)
            .callback(&token, provider, &forward)
            .await?;
        Ok(bare(StatusCode::OK, connection))
    })
    .await
}
