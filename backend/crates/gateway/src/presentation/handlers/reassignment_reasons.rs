//! Reassignment reason handlers - bare payloads, `{error}` failures

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::reassignment_reason::{
    CreateReassignmentReasonRequest, UpdateReassignmentReasonRequest, parse_active_filter,
};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::ReassignmentReasonService;
use crate::presentation::extract::{QueryParams, param, parse_body, require_bearer};
use crate::presentation::response::{ack, bare, respond};

const STYLE: ErrorStyle = ErrorStyle::ErrorOnly;

/// GET /api/v0/reassignment-reasons
pub async fn list<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let is_active = parse_active_filter(param(&params, "is_active"))?;

        let reasons = ReassignmentReasonService::new(state.backend)
            .list(&token, is_active)
            .await?;
        Ok(bare(StatusCode::OK, reasons))
    })
    .await
}

/// POST /api/v0/reassignment-reasons
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CreateReassignmentReasonRequest = parse_body(&body)?;
        request.validate()?;

        let reason = ReassignmentReasonService::new(state.backend)
            .create(&token, &request)
            .await?;
        Ok(bare(StatusCode::CREATED, reason))
    })
    .await
}

/// PATCH /api/v0/reassignment-reasons/{id}
pub async fn update<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: UpdateReassignmentReasonRequest = parse_body(&body)?;
        request.validate()?;

        let reason = ReassignmentReasonService::new(state.backend)
            .update(&token, &id, &request)
            .await?;
        Ok(bare(StatusCode::OK, reason))
    })
    .await
}

/// DELETE /api/v0/reassignment-reasons/{id}
pub async fn delete<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        ReassignmentReasonService::new(state.backend)
            .delete(&token, &id)
            .await?;
        Ok(ack())
    })
    .await
}
