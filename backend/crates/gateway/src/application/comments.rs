//! Comment Service
//!
//! Comments hang off a campaign when listed or created, but are addressed
//! directly by id for edits and deletes.

use std::sync::Arc;

use contracts::PageRequest;
use contracts::comment::{CreateCommentRequest, UpdateCommentRequest};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::Value;

use super::{execute, fetch};

pub struct CommentService<B> {
    backend: Arc<B>,
}

impl<B: Backend> CommentService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    fn campaign_path(campaign_id: &str) -> AppResult<String> {
        Ok(format!("/api/v0/campaigns/{}/comments", segment(campaign_id)?))
    }

    fn comment_path(comment_id: &str) -> AppResult<String> {
        Ok(format!("/api/v0/comments/{}", segment(comment_id)?))
    }

    pub async fn list(
        &self,
        token: &str,
        campaign_id: &str,
        page: PageRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::get(Self::campaign_path(campaign_id)?)
            .query("page", page.page)
            .query("page_size", page.page_size)
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(
        &self,
        token: &str,
        campaign_id: &str,
        body: &CreateCommentRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post(Self::campaign_path(campaign_id)?)
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn update(
        &self,
        token: &str,
        comment_id: &str,
        body: &UpdateCommentRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::patch(Self::comment_path(comment_id)?)
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn delete(&self, token: &str, comment_id: &str) -> AppResult<()> {
        let request = BackendRequest::delete(Self::comment_path(comment_id)?).bearer(token);
        execute(&*self.backend, request).await
    }
}
