use contracts::campaign::{Campaign, CreateCampaignRequest, UpdateCampaignRequest};
use contracts::{PageRequest, Paginated};
use reqwest::Method;

use super::page_query;
use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct Campaigns<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Campaigns<'_> {
    pub async fn list(
        &self,
        page: PageRequest,
        status: Option<&str>,
    ) -> ClientResult<Paginated<Campaign>> {
        let mut query = page_query(page);
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.client.get("/api/v0/campaigns", &query).await
    }

    pub async fn create(&self, body: &CreateCampaignRequest) -> ClientResult<Campaign> {
        self.client
            .send(Method::POST, "/api/v0/campaigns", body)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Campaign> {
        self.client
            .get(&format!("/api/v0/campaigns/{id}"), &[])
            .await
    }

    pub async fn update(&self, id: &str, body: &UpdateCampaignRequest) -> ClientResult<Campaign> {
        self.client
            .send(Method::PATCH, &format!("/api/v0/campaigns/{id}"), body)
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/api/v0/campaigns/{id}")).await
    }
}
