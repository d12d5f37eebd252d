//! Tag handlers - bare payloads, `{error}` failures

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::tag::{AddTagRequest, CreateTagRequest, TagIdsRequest};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::TagService;
use crate::presentation::extract::{QueryParams, param, parse_body, require_bearer};
use crate::presentation::response::{ack, bare, respond};

const STYLE: ErrorStyle = ErrorStyle::ErrorOnly;

/// GET /api/v0/tags
pub async fn list<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let search = param(&params, "search")
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let tags = TagService::new(state.backend).list(&token, search).await?;
        Ok(bare(StatusCode::OK, tags))
    })
    .await
}

/// POST /api/v0/tags
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CreateTagRequest = parse_body(&body)?;
        request.validate()?;

        let tag = TagService::new(state.backend).create(&token, &request).await?;
        Ok(bare(StatusCode::CREATED, tag))
    })
    .await
}

/// DELETE /api/v0/tags/{id}
pub async fn delete<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(tag_id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        TagService::new(state.backend).delete(&token, &tag_id).await?;
        Ok(ack())
    })
    .await
}

/// POST /api/v0/tags/by-ids
pub async fn by_ids<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: TagIdsRequest = parse_body(&body)?;

        let tags = TagService::new(state.backend)
            .by_ids(&token, request.ids)
            .await?;
        Ok(bare(StatusCode::OK, tags))
    })
    .await
}

/// POST /api/v0/campaign-influencers/{id}/tags
pub async fn add_to_influencer<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(campaign_influencer_id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: AddTagRequest = parse_body(&body)?;
        request.validate()?;

        let result = TagService::new(state.backend)
            .add_to_influencer(&token, &campaign_influencer_id, &request)
            .await?;
        Ok(bare(StatusCode::CREATED, result))
    })
    .await
}

/// DELETE /api/v0/campaign-influencers/{id}/tags/{tag_id}
pub async fn remove_from_influencer<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path((campaign_influencer_id, tag_id)): Path<(String, String)>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        TagService::new(state.backend)
            .remove_from_influencer(&token, &campaign_influencer_id, &tag_id)
            .await?;
        Ok(ack())
    })
    .await
}
