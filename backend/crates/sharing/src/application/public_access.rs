//! Public Access Use Cases
//!
//! Token-scoped views for external parties. The token is forwarded as-is
//! (query string on reads, body on writes); whether it is valid, unexpired
//! and carries the needed permission is decided by the backend. Upstream
//! failures are re-classified for the public layer; successful payloads
//! are relayed as received.

use std::sync::Arc;

use contracts::PageRequest;
use contracts::public_session::{
    CreatePublicSessionRequest, PublicCommentRequest, PublicPriceResponseRequest,
};
use kernel::error::app_error::AppResult;
use platform::bearer::Credential;
use platform::upstream::{Backend, BackendRequest};
use serde_json::Value;

use crate::error::classify_public_error;

pub struct PublicAccessService<B> {
    backend: Arc<B>,
}

impl<B: Backend> PublicAccessService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    async fn fetch(&self, request: BackendRequest) -> AppResult<Value> {
        let response = self
            .backend
            .send(request)
            .await
            .map_err(classify_public_error)?;
        response.json()
    }

    /// Issue a session token for a resource
    pub async fn create_session(
        &self,
        credential: &Credential,
        body: &CreatePublicSessionRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v0/public-sessions")
            .bearer(credential.token())
            .json(body)?;
        let session = self.backend.send(request).await?.json()?;

        tracing::info!(
            resource_type = %body.resource_type,
            resource_id = ?body.resource_id,
            system = credential.is_system(),
            "Public session created"
        );
        Ok(session)
    }

    pub async fn session(&self, token: &str) -> AppResult<Value> {
        self.fetch(BackendRequest::get("/api/v0/public/session").query("token", token))
            .await
    }

    /// Campaign as shared; shape depends on the session's permissions
    pub async fn campaign(&self, token: &str) -> AppResult<Value> {
        self.fetch(BackendRequest::get("/api/v0/public/campaign").query("token", token))
            .await
    }

    pub async fn comments(&self, token: &str, page: PageRequest) -> AppResult<Value> {
        self.fetch(
            BackendRequest::get("/api/v0/public/comments")
                .query("token", token)
                .query("page", page.page)
                .query("page_size", page.page_size),
        )
        .await
    }

    pub async fn post_comment(&self, body: &PublicCommentRequest) -> AppResult<Value> {
        let comment = self
            .fetch(BackendRequest::post("/api/v0/public/comments").json(body)?)
            .await?;

        tracing::info!(comment_id = %comment["id"], "Public comment posted");
        Ok(comment)
    }

    pub async fn price_negotiations(
        &self,
        token: &str,
        campaign_influencer_id: &str,
    ) -> AppResult<Value> {
        self.fetch(
            BackendRequest::get("/api/v0/public/price-negotiations")
                .query("token", token)
                .query("campaign_influencer_id", campaign_influencer_id),
        )
        .await
    }

    pub async fn respond_to_price(&self, body: &PublicPriceResponseRequest) -> AppResult<Value> {
        let result = self
            .fetch(BackendRequest::post("/api/v0/public/price-negotiations").json(body)?)
            .await?;

        tracing::info!(action = %body.action, "Public price response recorded");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;
    use platform::testing::RecordingBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_token_goes_in_query_not_header() {
        let backend = Arc::new(RecordingBackend::json(200, json!({ "id": 1, "name": "Launch" })));
        let service = PublicAccessService::new(backend.clone());

        service.campaign("pub_abc").await.unwrap();

        let call = backend.only_call();
        assert_eq!(call.query_value("token"), Some("pub_abc"));
        assert_eq!(call.token, None);
    }

    #[tokio::test]
    async fn test_expired_token_is_reclassified() {
        let backend = Arc::new(RecordingBackend::error(
            400,
            json!({ "detail": "Invalid or expired session token" }),
        ));
        let service = PublicAccessService::new(backend);

        let err = service.session("pub_old").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(err.action().is_some());
    }

    #[tokio::test]
    async fn test_session_payload_is_relayed_unchanged() {
        let payload = json!({
            "session_token": "pub_abc",
            "resource_type": "campaign",
            "resource_id": 42,
            "expires_at": "2030-01-01T00:00:00",
            "permissions": { "can_view": true },
            "session_metadata": null,
            "brand_name": "Acme"
        });
        let backend = Arc::new(RecordingBackend::json(200, payload.clone()));
        let service = PublicAccessService::new(backend);

        assert_eq!(service.session("pub_abc").await.unwrap(), payload);
    }
}
