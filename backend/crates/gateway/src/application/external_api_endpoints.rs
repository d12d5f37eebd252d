//! External API Endpoint Service

use std::sync::Arc;

use contracts::external_api_endpoint::UpsertExternalApiEndpointRequest;
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::Value;

use super::{execute, fetch};

pub struct ExternalApiEndpointService<B> {
    backend: Arc<B>,
}

impl<B: Backend> ExternalApiEndpointService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    fn path(id: &str) -> AppResult<String> {
        Ok(format!("/api/v0/external-api-endpoints/{}", segment(id)?))
    }

    pub async fn list(&self, token: &str) -> AppResult<Value> {
        let request = BackendRequest::get("/api/v0/external-api-endpoints").bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(
        &self,
        token: &str,
        body: &UpsertExternalApiEndpointRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v0/external-api-endpoints")
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn replace(
        &self,
        token: &str,
        id: &str,
        body: &UpsertExternalApiEndpointRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::put(Self::path(id)?)
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> AppResult<()> {
        let request = BackendRequest::delete(Self::path(id)?).bearer(token);
        execute(&*self.backend, request).await
    }
}
