//! Views authorized by a public session token

use contracts::PageRequest;
use contracts::comment::Comment;
use contracts::price_negotiation::PriceNegotiation;
use contracts::public_session::{PublicCommentRequest, PublicPriceResponseRequest, PublicSession};
use serde_json::Value;

use super::page_query;
use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct PublicViews<'a> {
    pub(crate) client: &'a ApiClient,
}

fn token_query(token: &str) -> Vec<(&'static str, String)> {
    vec![("token", token.to_string())]
}

impl PublicViews<'_> {
    pub async fn session(&self, token: &str) -> ClientResult<PublicSession> {
        self.client
            .public_get("/api/v0/public/session", &token_query(token))
            .await
    }

    pub async fn campaign(&self, token: &str) -> ClientResult<Value> {
        self.client
            .public_get("/api/v0/public/campaign", &token_query(token))
            .await
    }

    pub async fn comments(&self, token: &str, page: PageRequest) -> ClientResult<Value> {
        let mut query = token_query(token);
        query.extend(page_query(page));
        self.client
            .public_get("/api/v0/public/comments", &query)
            .await
    }

    pub async fn post_comment(&self, body: &PublicCommentRequest) -> ClientResult<Comment> {
        self.client
            .public_post("/api/v0/public/comments", body)
            .await
    }

    pub async fn price_negotiations(
        &self,
        token: &str,
        campaign_influencer_id: &str,
    ) -> ClientResult<Vec<PriceNegotiation>> {
        let mut query = token_query(token);
        query.push(("campaign_influencer_id", campaign_influencer_id.to_string()));
        self.client
            .public_get("/api/v0/public/price-negotiations", &query)
            .await
    }

    pub async fn respond_to_price(&self, body: &PublicPriceResponseRequest) -> ClientResult<Value> {
        self.client
            .public_post("/api/v0/public/price-negotiations", body)
            .await
    }
}
