//! Upstream backend transport
//!
//! Every server service talks to the FastAPI backend through the [`Backend`]
//! trait. The transport owns two decisions so that route handlers never look
//! at message text:
//! - how an error message is pulled out of an upstream body
//! - which [`ErrorKind`](kernel::error::kind::ErrorKind) a failure gets
//!
//! One request in, one upstream call out. No retries.

use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use http::Method;
use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// Request / Response
// ============================================================================

/// One call to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    /// Path relative to the backend base URL, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Bearer token to attach; `None` for public endpoints
    pub token: Option<String>,
}

impl BackendRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append the pair only when a value is present
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Serialize `body` as the JSON payload
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> AppResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Value of a query pair, if set
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Percent-encode one caller-supplied path segment.
///
/// Route parameters arrive already decoded, so an id such as `1?owner=all`
/// or `../../users/5` would otherwise rewrite the backend path or query.
/// `.` and `..` are refused outright: no encoding stops a server from
/// treating them as dot segments.
pub fn segment(raw: &str) -> AppResult<String> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(AppError::bad_request("Invalid path parameter"));
    }

    let mut url = reqwest::Url::parse("http://segment.invalid/")
        .map_app_err(ErrorKind::InternalServerError, "Failed to encode path parameter")?;
    url.path_segments_mut()
        .map_err(|()| AppError::internal("Failed to encode path parameter"))?
        .pop_if_empty()
        .push(raw);

    Ok(url.path().trim_start_matches('/').to_string())
}

/// Successful (2xx) upstream response
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Bytes,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body; an empty body decodes as JSON `null`
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        let bytes: &[u8] = if self.body.is_empty() {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(bytes).map_err(|e| {
            AppError::internal(format!("Invalid response from backend: {e}")).with_source(e)
        })
    }
}

/// Chunked body of a streamed upstream response
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, AppError>> + Send>>;

/// Successful streamed upstream response (chat replies)
pub struct BackendStream {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: ByteStream,
}

impl std::fmt::Debug for BackendStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendStream")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Transport trait
// ============================================================================

/// Backend transport
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Perform the call and buffer the body.
    ///
    /// Non-2xx responses come back as classified [`AppError`]s.
    async fn send(&self, request: BackendRequest) -> AppResult<BackendResponse>;

    /// Perform the call and hand back the body as a stream.
    async fn stream(&self, request: BackendRequest) -> AppResult<BackendStream>;
}

// ============================================================================
// Error extraction
// ============================================================================

/// Pull the human-readable message out of an upstream error body.
///
/// Recognized shapes, first match wins:
/// `{error:{message}}`, `{error:"..."}`, `{detail:"..."}`,
/// `{detail:[{msg}]}`, `{message:"..."}`.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    if let Some(error) = value.get("error") {
        if let Some(message) = error.get("message").and_then(Value::as_str) {
            return Some(message.to_string());
        }
        if let Some(message) = error.as_str() {
            return Some(message.to_string());
        }
    }

    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Build the classified error for a non-2xx upstream response
pub fn upstream_error(status: u16, body: &[u8]) -> AppError {
    let message = extract_error_message(body)
        .unwrap_or_else(|| format!("Backend request failed with status {status}"));
    AppError::from_upstream(status, message)
}

// ============================================================================
// reqwest implementation
// ============================================================================

/// reqwest-backed transport with a pooled client
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    media_client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_app_err(ErrorKind::InternalServerError, "Failed to create HTTP client")?;

        Ok(Self {
            client,
            media_client: crate::media::media_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn media_client(&self) -> &reqwest::Client {
        &self.media_client
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build(&self, request: &BackendRequest) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(request.method.clone(), self.url(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder
    }
}

impl Backend for HttpBackend {
    async fn send(&self, request: BackendRequest) -> AppResult<BackendResponse> {
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            authenticated = request.token.is_some(),
            "Forwarding request to backend"
        );

        let response = self.build(&request).send().await.map_err(|e| {
            tracing::error!(path = %request.path, error = %e, "Backend unreachable");
            AppError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if !(200..300).contains(&status) {
            let err = upstream_error(status, &body);
            tracing::warn!(
                path = %request.path,
                status,
                kind = %err.kind(),
                message = %err.message(),
                "Backend returned an error"
            );
            return Err(err);
        }

        Ok(BackendResponse { status, body })
    }

    async fn stream(&self, request: BackendRequest) -> AppResult<BackendStream> {
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            "Opening streamed backend request"
        );

        let response = self.build(&request).send().await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            let body = response.bytes().await?;
            let err = upstream_error(status, &body);
            tracing::warn!(path = %request.path, status, message = %err.message(), "Backend stream rejected");
            return Err(err);
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(AppError::from));

        Ok(BackendStream {
            status,
            content_type,
            body: Box::pin(body),
        })
    }
}
