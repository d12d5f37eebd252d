//! Price Negotiation Service

use std::sync::Arc;

use contracts::price_negotiation::{CounterOfferRequest, PriceApprovalRequest};
use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest, segment};
use serde_json::Value;

use super::fetch;

pub struct PriceNegotiationService<B> {
    backend: Arc<B>,
}

impl<B: Backend> PriceNegotiationService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    fn path(campaign_influencer_id: &str, tail: &str) -> AppResult<String> {
        Ok(format!(
            "/api/v0/campaign-influencers/{}/{tail}",
            segment(campaign_influencer_id)?
        ))
    }

    /// Negotiation history, oldest first
    pub async fn history(
        &self,
        token: &str,
        campaign_influencer_id: &str,
    ) -> AppResult<Value> {
        let request = BackendRequest::get(Self::path(campaign_influencer_id, "price-negotiations")?)
            .bearer(token);
        fetch(&*self.backend, request).await
    }

    pub async fn counter_offer(
        &self,
        token: &str,
        campaign_influencer_id: &str,
        body: &CounterOfferRequest,
    ) -> AppResult<Value> {
        let request =
            BackendRequest::post(Self::path(campaign_influencer_id, "price-negotiations")?)
                .bearer(token)
                .json(body)?;
        fetch(&*self.backend, request).await
    }

    /// Forward an approve/reject decision exactly as received
    pub async fn decide(
        &self,
        token: &str,
        campaign_influencer_id: &str,
        body: &PriceApprovalRequest,
    ) -> AppResult<Value> {
        let request = BackendRequest::post(Self::path(campaign_influencer_id, "price-approval")?)
            .bearer(token)
            .json(body)?;
        let result = fetch(&*self.backend, request).await?;

        tracing::info!(
            campaign_influencer_id = %campaign_influencer_id,
            action = %body.action,
            "Price decision recorded"
        );
        Ok(result)
    }
}
