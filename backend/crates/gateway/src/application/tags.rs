//! Tag Service

use std::sync::Arc;

use contracts::Id;
use contracts::tag::{AddTagRequest, CreateTagRequest, TagIdsRequest};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::{Value, json};

use super::{execute, fetch};

pub struct TagService<B> {
    backend: Arc<B>,
}

impl<B: Backend> TagService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn list(&self, token: &str, search: Option<&str>) -> AppResult<Value> {
        let request = BackendRequest::get("/api/v0/tags")
            .query_opt("search", search)
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(&self, token: &str, body: &CreateTagRequest) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v0/tags").bearer(token).json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn delete(&self, token: &str, tag_id: &str) -> AppResult<()> {
        let request =
            BackendRequest::delete(format!("/api/v0/tags/{}", segment(tag_id)?)).bearer(token);
        execute(&*self.backend, request).await
    }

    /// Resolve tags by id. An empty id list never reaches the backend.
    pub async fn by_ids(&self, token: &str, ids: Vec<Id>) -> AppResult<Value> {
        if ids.is_empty() {
            tracing::debug!("Empty tag id list, skipping backend call");
            return Ok(json!([]));
        }

        let request = BackendRequest::post("/api/v0/tags/by-ids")
            .bearer(token)
            .json(&TagIdsRequest { ids })?;
        fetch(&*self.backend, request).await
    }

    /// Attach a tag to a campaign influencer; the backend answers with the
    /// association, whose shape differs between tag-by-id and tag-by-name
    pub async fn add_to_influencer(
        &self,
        token: &str,
        campaign_influencer_id: &str,
        body: &AddTagRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post(format!(
            "/api/v0/campaign-influencers/{}/tags",
            segment(campaign_influencer_id)?
        ))
        .bearer(token)
        .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn remove_from_influencer(
        &self,
        token: &str,
        campaign_influencer_id: &str,
        tag_id: &str,
    ) -> AppResult<()> {
        let request = BackendRequest::delete(format!(
            "/api/v0/campaign-influencers/{}/tags/{}",
            segment(campaign_influencer_id)?,
            segment(tag_id)?
        ))
        .bearer(token);
        execute(&*self.backend, request).await
    }
}
