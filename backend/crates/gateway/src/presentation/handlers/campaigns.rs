//! Campaign handlers - bare payloads, `{error}` failures

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::PageRequest;
use contracts::campaign::{CreateCampaignRequest, UpdateCampaignRequest};
use kernel::envelope::ErrorStyle;
use kernel::pagination::MAX_PAGE_SIZE;

use super::{GatewayBackend, GatewayState};
use crate::application::CampaignService;
use crate::presentation::extract::{QueryParams, param, parse_body, require_bearer};
use crate::presentation::response::{ack, bare, respond};

const STYLE: ErrorStyle = ErrorStyle::ErrorOnly;

/// GET /api/v0/campaigns
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
            MAX_PAGE_SIZE,
        )?;
        // Status values belong to the backend; forward whatever was asked for
        let status = param(&params, "status").filter(|s| !s.trim().is_empty());

        let campaigns = CampaignService::new(state.backend)
            .list(&token, page, status)
            .await?;
        Ok(bare(StatusCode::OK, campaigns))
    })
    .await
}

/// POST /api/v0/campaigns
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CreateCampaignRequest = parse_body(&body)?;
        request.validate()?;

        let campaign = CampaignService::new(state.backend)
            .create(&token, &request)
            .await?;
        Ok(bare(StatusCode::CREATED, campaign))
    })
    .await
}

/// GET /api/v0/campaigns/{id}
pub async fn get<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let campaign = CampaignService::new(state.backend).get(&token, &id).await?;
        Ok(bare(StatusCode::OK, campaign))
    })
    .await
}

/// PATCH /api/v0/campaigns/{id}
pub async fn update<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: UpdateCampaignRequest = parse_body(&body)?;
        request.validate()?;

        let campaign = CampaignService::new(state.backend)
            .update(&token, &id, &request)
            .await?;
        Ok(bare(StatusCode::OK, campaign))
    })
    .await
}

/// DELETE /api/v0/campaigns/{id}
pub async fn delete<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        CampaignService::new(state.backend).delete(&token, &id).await?;
        Ok(ack())
    })
    .await
}
