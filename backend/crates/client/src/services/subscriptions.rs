use contracts::subscription::{
    CancelSubscriptionRequest, CreateSubscriptionRequest, Subscription, SubscriptionPlan,
};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct Subscriptions<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Subscriptions<'_> {
    pub async fn plans(&self) -> ClientResult<Vec<SubscriptionPlan>> {
        self.client.get("/api/v0/subscriptions/plans", &[]).await
    }

    /// `None` when the account has no subscription
    pub async fn current(&self) -> ClientResult<Option<Subscription>> {
        self.client.get("/api/v0/subscriptions/current", &[]).await
    }

    pub async fn create(&self, body: &CreateSubscriptionRequest) -> ClientResult<Subscription> {
        self.client
            .send(Method::POST, "/api/v0/subscriptions", body)
            .await
    }

    pub async fn cancel(
        &self,
        id: &str,
        body: &CancelSubscriptionRequest,
    ) -> ClientResult<Subscription> {
        self.client
            .send(
                Method::POST,
                &format!("/api/v0/subscriptions/{id}/cancel"),
                body,
            )
            .await
    }
}
