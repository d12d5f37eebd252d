//! Subscription handlers - `{success, data}` payloads, `{success:false, error}` failures

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use contracts::subscription::{CancelSubscriptionRequest, CreateSubscriptionRequest};
use kernel::envelope::ErrorStyle;

use super::{GatewayBackend, GatewayState};
use crate::application::SubscriptionService;
use crate::presentation::extract::{parse_body, parse_optional_body, require_bearer};
use crate::presentation::response::{data, respond};

const STYLE: ErrorStyle = ErrorStyle::SuccessFlag;

/// GET /api/v0/subscriptions/plans
pub async fn plans<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let plans = SubscriptionService::new(state.backend).plans(&token).await?;
        Ok(data(StatusCode::OK, plans))
    })
    .await
}

/// GET /api/v0/subscriptions/current
pub async fn current<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let subscription = SubscriptionService::new(state.backend)
            .current(&token)
            .await?;
        Ok(data(StatusCode::OK, subscription))
    })
    .await
}

/// POST /api/v0/subscriptions
pub async fn create<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CreateSubscriptionRequest = parse_body(&body)?;
        request.validate()?;

        let subscription = SubscriptionService::new(state.backend)
            .create(&token, &request)
            .await?;
        Ok(data(StatusCode::CREATED, subscription))
    })
    .await
}

/// POST /api/v0/subscriptions/{id}/cancel
pub async fn cancel<B: GatewayBackend>(
    State(state): State<GatewayState<B>>,
    headers: HeaderMap,
    Path(subscription_id): Path<String>,
    body: Bytes,
) -> Response {
    respond(STYLE, async move {
        let token = require_bearer(&headers)?;
        let request: CancelSubscriptionRequest = parse_optional_body(&body)?;

        let subscription = SubscriptionService::new(state.backend)
            .cancel(&token, &subscription_id, &request)
            .await?;
        Ok(data(StatusCode::OK, subscription))
    })
    .await
}
