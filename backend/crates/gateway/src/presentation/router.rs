//! Gateway Router

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};

use crate::presentation::handlers::{
    GatewayBackend, GatewayState, campaigns, comments, conversations, external_api_endpoints,
    image_proxy, oauth, price_negotiations, reassignment_reasons, subscriptions, tags,
};

/// Authenticated `/api/v0` and `/api/v1` routes plus the image proxy
pub fn gateway_router<B: GatewayBackend>(backend: Arc<B>) -> Router {
    let state = GatewayState::new(backend);

    Router::new()
        // Campaigns
        .route(
            "/api/v0/campaigns",
            get(campaigns::list::<B>).post(campaigns::create::<B>),
        )
        .route(
            "/api/v0/campaigns/{id}",
            get(campaigns::get::<B>)
                .patch(campaigns::update::<B>)
                .delete(campaigns::delete::<B>),
        )
        // Comments
        .route(
            "/api/v0/campaigns/{id}/comments",
            get(comments::list::<B>).post(comments::create::<B>),
        )
        .route(
            "/api/v0/comments/{id}",
            axum::routing::patch(comments::update::<B>).delete(comments::delete::<B>),
        )
        // Tags
        .route(
            "/api/v0/tags",
            get(tags::list::<B>).post(tags::create::<B>),
        )
        .route("/api/v0/tags/by-ids", post(tags::by_ids::<B>))
        .route("/api/v0/tags/{id}", axum::routing::delete(tags::delete::<B>))
        .route(
            "/api/v0/campaign-influencers/{id}/tags",
            post(tags::add_to_influencer::<B>),
        )
        .route(
            "/api/v0/campaign-influencers/{id}/tags/{tag_id}",
            axum::routing::delete(tags::remove_from_influencer::<B>),
        )
        // Price negotiations
        .route(
            "/api/v0/campaign-influencers/{id}/price-negotiations",
            get(price_negotiations::history::<B>).post(price_negotiations::counter_offer::<B>),
        )
        .route(
            "/api/v0/campaign-influencers/{id}/price-approval",
            post(price_negotiations::decide::<B>),
        )
        // Subscriptions
        .route("/api/v0/subscriptions", post(subscriptions::create::<B>))
        .route("/api/v0/subscriptions/plans", get(subscriptions::plans::<B>))
        .route("/api/v0/subscriptions/current", get(subscriptions::current::<B>))
        .route(
            "/api/v0/subscriptions/{id}/cancel",
            post(subscriptions::cancel::<B>),
        )
        // Reassignment reasons
        .route(
            "/api/v0/reassignment-reasons",
            get(reassignment_reasons::list::<B>).post(reassignment_reasons::create::<B>),
        )
        .route(
            "/api/v0/reassignment-reasons/{id}",
            axum::routing::patch(reassignment_reasons::update::<B>)
                .delete(reassignment_reasons::delete::<B>),
        )
        // External API endpoints
        .route(
            "/api/v0/external-api-endpoints",
            get(external_api_endpoints::list::<B>).post(external_api_endpoints::create::<B>),
        )
        .route(
            "/api/v0/external-api-endpoints/{id}",
            put(external_api_endpoints::replace::<B>).delete(external_api_endpoints::delete::<B>),
        )
        // OAuth
        .route(
            "/api/v0/oauth/{provider}/authorize-url",
            get(oauth::authorize_url::<B>),
        )
        .route("/api/v0/oauth/{provider}/callback", post(oauth::callback::<B>))
        // Image proxy
        .route("/api/v0/image-proxy", get(image_proxy::fetch::<B>))
        // AI chat
        .route(
            "/api/v1/conversations",
            get(conversations::list::<B>).post(conversations::create::<B>),
        )
        .route(
            "/api/v1/conversations/{id}",
            get(conversations::get::<B>).delete(conversations::delete::<B>),
        )
        .route(
            "/api/v1/conversations/{id}/messages",
            get(conversations::messages::<B>).post(conversations::send::<B>),
        )
        .route(
            "/api/v1/conversations/{id}/messages/stream",
            post(conversations::send_streaming::<B>),
        )
        .with_state(state)
}
