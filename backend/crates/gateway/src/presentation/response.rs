//! Success envelopes and the error boundary shared by all handlers

use std::future::Future;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::{ErrorStyle, SuccessAck, SuccessData};
use serde::Serialize;

use crate::error::GatewayResult;

/// Run a handler body, rendering any failure in the route's legacy style
pub async fn respond<F>(style: ErrorStyle, handler: F) -> Response
where
    F: Future<Output = GatewayResult<Response>>,
{
    match handler.await {
        Ok(response) => response,
        Err(err) => err.respond(style),
    }
}

/// Upstream payload, unchanged
pub fn bare<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// `{ success: true, data }`
pub fn data<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(SuccessData::new(payload))).into_response()
}

/// `{ success: true }`
pub fn ack() -> Response {
    (StatusCode::OK, Json(SuccessAck::OK)).into_response()
}
