use contracts::comment::{Comment, CreateCommentRequest, UpdateCommentRequest};
use contracts::{PageRequest, Paginated};
use reqwest::Method;

use super::page_query;
use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct Comments<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Comments<'_> {
    pub async fn list(&self, campaign_id: &str, page: PageRequest) -> ClientResult<Paginated<Comment>> {
        self.client
            .get(
                &format!("/api/v0/campaigns/{campaign_id}/comments"),
                &page_query(page),
            )
            .await
    }

    pub async fn create(&self, campaign_id: &str, body: &CreateCommentRequest) -> ClientResult<Comment> {
        self.client
            .send(
                Method::POST,
                &format!("/api/v0/campaigns/{campaign_id}/comments"),
                body,
            )
            .await
    }

    pub async fn update(&self, comment_id: &str, body: &UpdateCommentRequest) -> ClientResult<Comment> {
        self.client
            .send(Method::PATCH, &format!("/api/v0/comments/{comment_id}"), body)
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/v0/comments/{comment_id}"))
            .await
    }
}
