//! Price negotiation handlers - bare payloads, `{error}` failures

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::price_negotiation::{CounterOfferRequest, PriceApprovalRequest};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::PriceNegotiationService;
use crate::presentation::extract::{parse_body, require_bearer};
use crate::presentation::response::{bare, respond};

const STYLE: ErrorStyle = ErrorStyle::ErrorOnly;

/// GET /api/v0/campaign-influencers/{id}/price-negotiations
pub async fn history<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(campaign_influencer_id): Path<String>,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let negotiations = PriceNegotiationService::new(state.backend)
            .history(&token, &campaign_influencer_id)
            .await?;
        Ok(bare(StatusCode::OK, negotiations))
    })
    .await
}

/// POST /api/v0/campaign-influencers/{id}/price-negotiations
pub async fn counter_offer<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(campaign_influencer_id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CounterOfferRequest = parse_body(&body)?;
        request.validate()?;

        let negotiation = PriceNegotiationService::new(state.backend)
            .counter_offer(&token, &campaign_influencer_id, &request)
            .await?;
        Ok(bare(StatusCode::CREATED, negotiation))
    })
    .await
}

/// POST /api/v0/campaign-influencers/{id}/price-approval
pub async fn decide<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(campaign_influencer_id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: PriceApprovalRequest = parse_body(&body)?;
        request.validate()?;

        let result = PriceNegotiationService::new(state.backend)
            .decide(&token, &campaign_influencer_id, &request)
            .await?;
        Ok(bare(StatusCode::OK, result))
    })
    .await
}
