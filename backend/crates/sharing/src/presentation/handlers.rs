//! HTTP Handlers
//!
//! Public views answer `{success, data}` / `{success:false, error}`; shared
//! reports answer `{success, ...}` / `{error}`.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::Utc;
use contracts::PageRequest;
use contracts::public_session::{
    CreatePublicSessionRequest, PublicCommentRequest, PublicPriceResponseRequest, require_token,
};
use contracts::shared_report::ShareReportRequest;
use kernel::envelope::{ErrorStyle, SuccessData};
use kernel::error::app_error::OptionExt;
use kernel::error::kind::ErrorKind;
use kernel::pagination::MAX_PAGE_SIZE;
use platform::bearer::{extract_bearer_token, resolve_credential};
use platform::upstream::Backend;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::{PublicAccessService, SharedReportService, SharingConfig};
use crate::domain::repository::SharedReportRepository;
use crate::error::{SharingError, SharingResult};

const PUBLIC: ErrorStyle = ErrorStyle::SuccessFlag;
const REPORTS: ErrorStyle = ErrorStyle::ErrorOnly;

type QueryParams = HashMap<String, String>;

/// Transport the public routes can run on
pub trait SharingBackend: Backend + Send + Sync + 'static {}

impl<T> SharingBackend for T where T: Backend + Send + Sync + 'static {}

/// Shared state for sharing handlers
pub struct SharingState<B, R> {
    pub backend: Arc<B>,
    pub reports: Arc<R>,
    pub config: Arc<SharingConfig>,
}

impl<B, R> SharingState<B, R> {
    pub fn new(backend: Arc<B>, reports: Arc<R>, config: SharingConfig) -> Self {
        Self {
            backend,
            reports,
            config: Arc::new(config),
        }
    }
}

impl<B: Backend, R> SharingState<B, R> {
    fn public_access(&self) -> PublicAccessService<B> {
        PublicAccessService::new(self.backend.clone())
    }
}

impl<B, R: SharedReportRepository> SharingState<B, R> {
    fn shared_reports(&self) -> SharedReportService<R> {
        SharedReportService::new(self.reports.clone(), self.config.clone())
    }
}

impl<B, R> Clone for SharingState<B, R> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            reports: self.reports.clone(),
            config: self.config.clone(),
        }
    }
}

async fn respond<F>(style: ErrorStyle, handler: F) -> Response
where
    F: Future<Output = SharingResult<Response>>,
{
    match handler.await {
        Ok(response) => response,
        Err(err) => err.respond(style),
    }
}

fn data<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(SuccessData::new(payload))).into_response()
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> SharingResult<T> {
    Ok(serde_json::from_slice(body)?)
}

fn param<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str)
}

/// POST /api/v0/public-sessions
pub async fn create_session<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(PUBLIC, async move {
        let credential =
            resolve_credential(&headers, state.config.internal_system_token.as_deref())
                .ok_or(SharingError::Unauthenticated)?;
        let request: CreatePublicSessionRequest = parse_body(&body)?;
        request.validate()?;

        let session = state
            .public_access()
            .create_session(&credential, &request)
            .await?;
        Ok(data(StatusCode::CREATED, session))
    })
    .await
}

/// GET /api/v0/public/session
pub async fn session<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(PUBLIC, async move {
        let token = require_token(param(&params, "token"))?;
        let session = state.public_access().session(token).await?;
        Ok(data(StatusCode::OK, session))
    })
    .await
}

/// GET /api/v0/public/campaign
pub async fn campaign<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(PUBLIC, async move {
        let token = require_token(param(&params, "token"))?;
        let campaign = state.public_access().campaign(token).await?;
        Ok(data(StatusCode::OK, campaign))
    })
    .await
}

/// GET /api/v0/public/comments
pub async fn comments<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(PUBLIC, async move {
        let token = require_token(param(&params, "token"))?;
        let page = PageRequest::parse(
            param(&params, "page"),
            param(&params, "page_size"),
            MAX_PAGE_SIZE,
        )?;

        let comments = state.public_access().comments(token, page).await?;
        Ok(data(StatusCode::OK, comments))
    })
    .await
}

/// POST /api/v0/public/comments
pub async fn post_comment<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    body: Bytes,
) -> Response {
    respond(PUBLIC, async move {
        let request: PublicCommentRequest = parse_body(&body)?;
        request.validate()?;

        let comment = state.public_access().post_comment(&request).await?;
        Ok(data(StatusCode::CREATED, comment))
    })
    .await
}

/// GET /api/v0/public/price-negotiations
pub async fn price_negotiations<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    Query(params): Query<QueryParams>,
) -> Response {
    respond(PUBLIC, async move {
        let token = require_token(param(&params, "token"))?;
        let campaign_influencer_id = param(&params, "campaign_influencer_id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_app_err(ErrorKind::BadRequest, "campaign_influencer_id is required")?;

        let negotiations = state
            .public_access()
            .price_negotiations(token, campaign_influencer_id)
            .await?;
        Ok(data(StatusCode::OK, negotiations))
    })
    .await
}

/// POST /api/v0/public/price-negotiations
pub async fn respond_to_price<B: SharingBackend, R>(
    State(state): State<SharingState<B, R>>,
    body: Bytes,
) -> Response {
    respond(PUBLIC, async move {
        let request: PublicPriceResponseRequest = parse_body(&body)?;
        request.validate()?;

        let result = state.public_access().respond_to_price(&request).await?;
        Ok(data(StatusCode::OK, result))
    })
    .await
}

/// POST /api/v0/shared-reports
pub async fn share_report<B, R: SharedReportRepository>(
    State(state): State<SharingState<B, R>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(REPORTS, async move {
        extract_bearer_token(&headers).ok_or(SharingError::Unauthenticated)?;
        let request: ShareReportRequest = parse_body(&body)?;

        let response = state.shared_reports().share(request, Utc::now()).await?;
        tracing::info!(share_url = %response.share_url, "Shared report created");
        Ok((StatusCode::CREATED, Json(response)).into_response())
    })
    .await
}

/// GET /api/v0/shared-reports/{campaign_id}
pub async fn open_report<B, R: SharedReportRepository>(
    State(state): State<SharingState<B, R>>,
    Path(campaign_id): Path<String>,
) -> Response {
    respond(REPORTS, async move {
        let report = state
            .shared_reports()
            .open(&campaign_id, Utc::now())
            .await?;
        Ok(data(StatusCode::OK, report))
    })
    .await
}
