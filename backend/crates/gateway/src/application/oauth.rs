//! OAuth Service

use std::sync::Arc;

use contracts::oauth::{OAuthCallbackForward, OAuthProvider};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest};
use serde_json::Value;

use super::fetch;

pub struct OAuthService<B> {
    backend: Arc<B>,
}

impl<B: Backend> OAuthService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn authorize_url(
        &self,
        token: &str,
        provider: OAuthProvider,
    ) -> AppResult<Value> {
        let request =
            BackendRequest::get(format!("/api/v0/oauth/{provider}/authorize-url")).bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn callback(
        &self,
        token: &str,
        provider: OAuthProvider,
        body: &OAuthCallbackForward,
    ) -> AppResult<Value> {
        let request = BackendRequest::post(format!("/api/v0/oauth/{provider}/callback"))
            .bearer(token)
            .json(body)?;
        let connection = fetch(&*self.backend, request).await?;

        tracing::info!(provider = %provider, "Social account connected");
        Ok(connection)
    }
}
