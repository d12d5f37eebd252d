//! Reassignment Reason Service

use std::sync::Arc;

use contracts::reassignment_reason::{
    CreateReassignmentReasonRequest, UpdateReassignmentReasonRequest,
};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::Value;

use super::{execute, fetch};

pub struct ReassignmentReasonService<B> {
    backend: Arc<B>,
}

impl<B: Backend> ReassignmentReasonService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    fn path(id: &str) -> AppResult<String> {
        Ok(format!("/api/v0/reassignment-reasons/{}", segment(id)?))
    }

    pub async fn list(
        &self,
        token: &str,
        is_active: Option<bool>,
    ) -> AppResult<Value> {
        let request = BackendRequest::get("/api/v0/reassignment-reasons")
            .query_opt("is_active", is_active)
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(
        &self,
        token: &str,
        body: &CreateReassignmentReasonRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v0/reassignment-reasons")
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn update(
        &self,
        token: &str,
        id: &str,
        body: &UpdateReassignmentReasonRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::patch(Self::path(id)?)
            .bearer(token)
            .json(body)?;
        fetch(&*self.backend, request).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> AppResult<()> {
        let request = BackendRequest::delete(Self::path(id)?).bearer(token);
        execute(&*self.backend, request).await
    }
}
