//! Campaign Service

use std::sync::Arc;

use contracts::PageRequest;
use contracts::campaign::{CreateCampaignRequest, UpdateCampaignRequest};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::Value;

use super::{execute, fetch};

pub struct CampaignService<B> {
    backend: Arc<B>,
}

impl<B: Backend> CampaignService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn list(
        &self,
        token: &str,
        page: PageRequest,
        status: Option<&str>,
    ) -> AppResult<Value> {
        tracing::debug!(page = page.page, page_size = page.page_size, ?status, "Listing campaigns");

        let request = BackendRequest::get("/api/v0/campaigns")
            .query("page", page.page)
            .query("page_size", page.page_size)
            .query_opt("status", status)
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(&self, token: &str, body: &CreateCampaignRequest) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v0/campaigns")
            .bearer(token)
            .json(body)?;
        let campaign = fetch(&*self.backend, request).await?;

        tracing::info!(campaign_id = %campaign["id"], "Campaign created");
        Ok(campaign)
    }

    pub async fn get(&self, token: &str, id: &str) -> AppResult<Value> {
        let request =
            BackendRequest::get(format!("/api/v0/campaigns/{}", segment(id)?)).bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn update(
        &self,
        token: &str,
        id: &str,
        body: &UpdateCampaignRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::patch(format!("/api/v0/campaigns/{}", segment(id)?))
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> AppResult<()> {
        let request =
            BackendRequest::delete(format!("/api/v0/campaigns/{}", segment(id)?)).bearer(token);
        execute(&*self.backend, request).await?;

        tracing::info!(campaign_id = %id, "Campaign deleted");
        Ok(())
    }
}
