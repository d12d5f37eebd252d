//! Subscription Service

use std::sync::Arc;

use contracts::subscription::{CancelSubscriptionRequest, CreateSubscriptionRequest};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::Value;

use super::fetch;

pub struct SubscriptionService<B> {
    backend: Arc<B>,
}

impl<B: Backend> SubscriptionService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn plans(&self, token: &str) -> AppResult<Value> {
        let request = BackendRequest::get("/api/v0/subscriptions/plans").bearer(token);
        fetch(&*self.backend, request).await
    }

    /// `null` when the brand has no active subscription
    pub async fn current(&self, token: &str) -> AppResult<Value> {
        let request = BackendRequest::get("/api/v0/subscriptions/current").bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn create(
        &self,
        token: &str,
        body: &CreateSubscriptionRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post("/api/v0/subscriptions")
            .bearer(token)
            .json(body)?;
        let subscription = fetch(&*self.backend, request).await?;

        tracing::info!(subscription_id = %subscription["id"], "Subscription created");
        Ok(subscription)
    }

    pub async fn cancel(
        &self,
        token: &str,
        subscription_id: &str,
        body: &CancelSubscriptionRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post(format!(
            "/api/v0/subscriptions/{}/cancel",
            segment(subscription_id)?
        ))
        .bearer(token)
        .json(body)?;
        let subscription = fetch(&*self.backend, request).await?;

        tracing::info!(subscription_id = %subscription_id, "Subscription cancelled");
        Ok(subscription)
    }
}
