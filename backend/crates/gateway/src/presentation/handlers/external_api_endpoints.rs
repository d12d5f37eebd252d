//! External API endpoint handlers - `{success, data}` payloads, `{success:false, error}` failures

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::external_api_endpoint::UpsertExternalApiEndpointRequest;
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::ExternalApiEndpointService;
use crate::presentation::extract::{parse_body, require_bearer};
use crate::presentation::response::{ack, data, respond};

const STYLE: ErrorStyle = ErrorStyle::SuccessFlag;

/// GET /api/v0/external-api-endpoints
pub async fn list<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let endpoints = ExternalApiEndpointService::new(state.backend)
            .list(&token)
            .await?;
        Ok(data(StatusCode::OK, endpoints))
    })
    .await
}

/// POST /api/v0/external-api-endpoints
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: UpsertExternalApiEndpointRequest = parse_body(&body)?;
        request.validate()?;

        let endpoint = ExternalApiEndpointService::new(state.backend)
            .create(&token, &request)
            .await?;
        Ok(data(StatusCode::CREATED, endpoint))
    })
    .await
}

/// PUT /api/v0/external-api-endpoints/{id}
pub async fn replace<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: UpsertExternalApiEndpointRequest = parse_body(&body)?;
        request.validate()?;

        let endpoint = ExternalApiEndpointService::new(state.backend)
            .replace(&token, &id, &request)
            .await?;
        Ok(data(StatusCode::OK, endpoint))
    })
    .await
}

/// DELETE /api/v0/external-api-endpoints/{id}
pub async fn delete<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        ExternalApiEndpointService::new(state.backend)
            .delete(&token, &id)
            .await?;
        Ok(ack())
    })
    .await
}
