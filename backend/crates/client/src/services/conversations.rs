use contracts::conversation::{
    ChatMessage, Conversation, CreateConversationRequest, CursorPage, SendMessageRequest,
};
use contracts::{PageRequest, Paginated};
use reqwest::Method;
use serde_json::Value;

use super::page_query;
use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct Conversations<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Conversations<'_> {
    pub async fn list(&self, page: PageRequest) -> ClientResult<Paginated<Conversation>> {
        self.client
            .get("/api/v1/conversations", &page_query(page))
            .await
    }

    pub async fn create(&self, body: &CreateConversationRequest) -> ClientResult<Conversation> {
        self.client
            .send(Method::POST, "/api/v1/conversations", body)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Conversation> {
        self.client
            .get(&format!("/api/v1/conversations/{id}"), &[])
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/v1/conversations/{id}"))
            .await
    }

    /// Older messages page backwards from `cursor`
    pub async fn messages(
        &self,
        id: &str,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> ClientResult<CursorPage<ChatMessage>> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.client
            .get(&format!("/api/v1/conversations/{id}/messages"), &query)
            .await
    }

    pub async fn send(&self, id: &str, body: &SendMessageRequest) -> ClientResult<Value> {
        self.client
            .send(
                Method::POST,
                &format!("/api/v1/conversations/{id}/messages"),
                body,
            )
            .await
    }
}
