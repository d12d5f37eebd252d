//! Shared request wrapper
//!
//! Every service call goes through one path: read the cached
//! token, attach it, send, then unwrap the gateway's envelope.

use std::sync::Arc;

use platform::upstream::extract_error_message;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::storage::TokenStorage;

/// Client for the gateway's `/api/...` routes
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Option<Arc<dyn TokenStorage>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            storage: Some(storage),
        }
    }

    /// Client for a context with no browser storage; every call fails
    pub fn without_browser(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            storage: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn storage(&self) -> ClientResult<&Arc<dyn TokenStorage>> {
        self.storage.as_ref().ok_or(ClientError::NotInBrowser)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.call(Method::GET, path, query, None, true).await
    }

    pub(crate) async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.call(method, path, &[], Some(body), true).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let _: Value = self.call(Method::DELETE, path, &[], None, true).await?;
        Ok(())
    }

    /// Read authorized by a public session token in the query
    pub(crate) async fn public_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.call(Method::GET, path, query, None, false).await
    }

    /// Write authorized by a public session token in the body
    pub(crate) async fn public_post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.call(Method::POST, path, &[], Some(body), false).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        authenticated: bool,
    ) -> ClientResult<T> {
        let storage = self.storage()?;
        let mut request = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .query(query);
        if authenticated {
            let token = storage.token().ok_or(ClientError::MissingToken)?;
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = extract_error_message(&bytes)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            tracing::debug!(status = status.as_u16(), message = %message, "Gateway error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(serde_json::from_value(unwrap_envelope(value))?)
    }
}

/// `{success:true, data}` yields `data`; other payloads pass through
pub(crate) fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.get("success") == Some(&Value::Bool(true)) && map.contains_key("data") =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
