//! AI chat handlers - `{success, data}` payloads, `{success:false, error}` failures

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use contracts::PageRequest;
use contracts::conversation::{
    CreateConversationRequest, CursorRequest, MAX_CONVERSATION_PAGE_SIZE, SendMessageRequest,
};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::ConversationService;
use crate::presentation::extract::{
    QueryParams, param, parse_body, parse_optional_body, require_bearer,
};
use crate::presentation::response::{ack, data, respond};

const STYLE: ErrorStyle = ErrorStyle::SuccessFlag;

/// GET /api/v1/conversations
pub async fn list<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let page = PageRequest::parse(
            param(&params, "page"),
            param(&params, "page_size"),
            MAX_CONVERSATION_PAGE_SIZE,
        )?;

        let conversations = ConversationService::new(state.backend)
            .list(&token, page)
            .await?;
        Ok(data(StatusCode::OK, conversations))
    })
    .await
}

/// POST /api/v1/conversations
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CreateConversationRequest = parse_optional_body(&body)?;

        let conversation = ConversationService::new(state.backend)
            .create(&token, &request)
            .await?;
        Ok(data(StatusCode::CREATED, conversation))
    })
    .await
}

/// GET /api/v1/conversations/{id}
pub async fn get<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let conversation = ConversationService::new(state.backend)
            .get(&token, &id)
            .await?;
        Ok(data(StatusCode::OK, conversation))
    })
    .await
}

/// DELETE /api/v1/conversations/{id}
pub async fn delete<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        ConversationService::new(state.backend)
            .delete(&token, &id)
            .await?;
        Ok(ack())
    })
    .await
}

/// GET /api/v1/conversations/{id}/messages
pub async fn messages<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let cursor = CursorRequest::parse(param(&params, "cursor"), param(&params, "limit"))?;

        let page = ConversationService::new(state.backend)
            .messages(&token, &id, &cursor)
            .await?;
        Ok(data(StatusCode::OK, page))
    })
    .await
}

/// POST /api/v1/conversations/{id}/messages
pub async fn send<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: SendMessageRequest = parse_body(&body)?;
        request.validate()?;

        let exchange = ConversationService::new(state.backend)
            .send(&token, &id, &request)
            .await?;
        Ok(data(StatusCode::CREATED, exchange))
    })
    .await
}

/// POST /api/v1/conversations/{id}/messages/stream
///
/// Relays the backend's event stream chunk by chunk. Failures before the
/// first byte use the usual envelope; once streaming has started the
/// status line is already sent.
pub async fn send_streaming<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: SendMessageRequest = parse_body(&body)?;
        request.validate()?;

        let stream = ConversationService::new(state.backend)
            .send_streaming(&token, &id, &request)
            .await?;

        let status = StatusCode::from_u16(stream.status).unwrap_or(StatusCode::OK);
        let content_type = stream
            .content_type
            .unwrap_or_else(|| "text/event-stream".to_string());

        Ok((
            status,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "no-cache".to_string()),
            ],
            Body::from_stream(stream.body),
        )
            .into_response())
    })
    .await
}
