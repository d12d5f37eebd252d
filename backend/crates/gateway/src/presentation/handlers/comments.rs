//! Comment handlers - `{success, data}` payloads, `{success:false, error}` failures

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::PageRequest;
use contracts::comment::{CreateCommentRequest, UpdateCommentRequest};
use kernel::envelope::ErrorStyle;
use kernel::pagination::MAX_PAGE_SIZE;

use super::{GatewayBackend, GatewayState};
use crate::application::CommentService;
use crate::presentation::extract::{QueryParams, param, parse_body, require_bearer};
use crate::presentation::response::{ack, data, respond};

const STYLE: ErrorStyle = ErrorStyle::SuccessFlag;

/// GET /api/v0/campaigns/{id}/comments
pub async fn list<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(campaign_id): Path<String>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let page = PageRequest::parse(
            param(&params, "page"),
            param(&params, "page_size"),
            MAX_PAGE_SIZE,
        )?;

        let comments = CommentService::new(state.backend)
            .list(&token, &campaign_id, page)
            .await?;
        Ok(data(StatusCode::OK, comments))
    })
    .await
}

/// POST /api/v0/campaigns/{id}/comments
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(campaign_id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CreateCommentRequest = parse_body(&body)?;
        request.validate()?;

        let comment = CommentService::new(state.backend)
            .create(&token, &campaign_id, &request)
            .await?;
        Ok(data(StatusCode::CREATED, comment))
    })
    .await
}

/// PATCH /api/v0/comments/{id}
pub async fn update<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(comment_id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: UpdateCommentRequest = parse_body(&body)?;
        request.validate()?;

        let comment = CommentService::new(state.backend)
            .update(&token, &comment_id, &request)
            .await?;
        Ok(data(StatusCode::OK, comment))
    })
    .await
}

/// DELETE /api/v0/comments/{id}
pub async fn delete<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(comment_id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        CommentService::new(state.backend)
            .delete(&token, &comment_id)
            .await?;
        Ok(ack())
    })
    .await
}
