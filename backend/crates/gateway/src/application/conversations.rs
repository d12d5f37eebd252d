//! Conversation Service
//!
//! AI chat. Persistence and inference live in the backend; replies can be
//! fetched whole or relayed as a server-sent event stream.

use std::sync::Arc;

use contracts::PageRequest;
use contracts::conversation::{CreateConversationRequest, CursorRequest, SendMessageRequest};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, BackendStream, segment};
use serde_json::Value;

use super::{execute, fetch};

pub struct ConversationService<B> {
    backend: Arc<B>,
}

impl<B: Backend> ConversationService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    fn path(id: &str, tail: &str) -> AppResult<String> {
        Ok(format!("/api/v1/conversations/{}{tail}", segment(id)?))
    }

    pub async fn list(&self, token: &str, page: PageRequest) -> AppResult<Value> {
        let request = BackendRequest::get("/api/v1/conversations")
            .query("page", page.page)
            .query("page_size", page.page_size)
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(
        &self,
        token: &str,
        body: &CreateConversationRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v1/conversations")
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn get(&self, token: &str, id: &str) -> AppResult<Value> {
        let request = BackendRequest::get(Self::path(id, "")?).bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> AppResult<()> {
        let request = BackendRequest::delete(Self::path(id, "")?).bearer(token);
        execute(&*self.backend, request).await
    }

    pub async fn messages(
        &self,
        token: &str,
        id: &str,
        cursor: &CursorRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::get(Self::path(id, "/messages")?)
            .query("limit", cursor.limit)
            .query_opt("cursor", cursor.cursor.as_deref())
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    /// Send a message and wait for the whole exchange
    pub async fn send(&self, token: &str, id: &str, body: &SendMessageRequest) -> AppResult<Value> {
        let request = BackendRequest::post(Self::path(id, "/messages")?)
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    /// Send a message and relay the reply as it is generated
    pub async fn send_streaming(
        &self,
        token: &str,
        id: &str,
        body: &SendMessageRequest,
    ) -> AppResult<BackendStream> {
        let request = BackendRequest::post(Self::path(id, "/messages/stream")?)
            .bearer(token)
            .json(body)?;
        self.backend.stream(request).await
    }
}
