use contracts::Id;
use contracts::tag::{AddTagRequest, CreateTagRequest, Tag, TagIdsRequest};
use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct Tags<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Tags<'_> {
    pub async fn list(&self, search: Option<&str>) -> ClientResult<Vec<Tag>> {
        let query: Vec<(&str, String)> = search
            .map(|search| vec![("search", search.to_string())])
            .unwrap_or_default();
        self.client.get("/api/v0/tags", &query).await
    }

    pub async fn create(&self, body: &CreateTagRequest) -> ClientResult<Tag> {
        self.client.send(Method::POST, "/api/v0/tags", body).await
    }

    pub async fn delete(&self, tag_id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/api/v0/tags/{tag_id}")).await
    }

    /// Empty `ids` short-circuits to an empty list
    pub async fn by_ids(&self, ids: Vec<Id>) -> ClientResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.client
            .send(Method::POST, "/api/v0/tags/by-ids", &TagIdsRequest { ids })
            .await
    }

    pub async fn add_to_influencer(
        &self,
        campaign_influencer_id: &str,
        body: &AddTagRequest,
    ) -> ClientResult<Value> {
        self.client
            .send(
                Method::POST,
                &format!("/api/v0/campaign-influencers/{campaign_influencer_id}/tags"),
                body,
            )
            .await
    }

    pub async fn remove_from_influencer(
        &self,
        campaign_influencer_id: &str,
        tag_id: &str,
    ) -> ClientResult<()> {
        self.client
            .delete(&format!(
                "/api/v0/campaign-influencers/{campaign_influencer_id}/tags/{tag_id}"
            ))
            .await
    }
}
