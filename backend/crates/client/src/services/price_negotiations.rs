use contracts::price_negotiation::{CounterOfferRequest, PriceApprovalRequest, PriceNegotiation};
use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct PriceNegotiations<'a> {
    pub(crate) client: &'a ApiClient,
}

impl PriceNegotiations<'_> {
    pub async fn history(&self, campaign_influencer_id: &str) -> ClientResult<Vec<PriceNegotiation>> {
        self.client
            .get(
                &format!("/api/v0/campaign-influencers/{campaign_influencer_id}/price-negotiations"),
                &[],
            )
            .await
    }

    pub async fn counter_offer(
        &self,
        campaign_influencer_id: &str,
        body: &CounterOfferRequest,
    ) -> ClientResult<PriceNegotiation> {
        self.client
            .send(
                Method::POST,
                &format!("/api/v0/campaign-influencers/{campaign_influencer_id}/price-negotiations"),
                body,
            )
            .await
    }

    pub async fn decide(
        &self,
        campaign_influencer_id: &str,
        body: &PriceApprovalRequest,
    ) -> ClientResult<Value> {
        self.client
            .send(
                Method::POST,
                &format!("/api/v0/campaign-influencers/{campaign_influencer_id}/price-approval"),
                body,
            )
            .await
    }
}
