//! Application Layer
//!
//! Server services: one per backend resource, each method wrapping exactly
//! one backend endpoint. Services never catch upstream errors; they are
//! returned to the handler already classified by the transport. Ids taken
//! from the route go through [`segment`](platform::upstream::segment)
//! before they are joined into a backend path.

pub mod campaigns;
pub mod comments;
pub mod conversations;
pub mod external_api_endpoints;
pub mod image_proxy;
pub mod oauth;
pub mod price_negotiations;
pub mod reassignment_reasons;
pub mod subscriptions;
pub mod tags;

pub use campaigns::CampaignService;
pub use comments::CommentService;
pub use conversations::ConversationService;
pub use external_api_endpoints::ExternalApiEndpointService;
pub use image_proxy::ImageProxyService;
pub use oauth::OAuthService;
pub use price_negotiations::PriceNegotiationService;
pub use reassignment_reasons::ReassignmentReasonService;
pub use subscriptions::SubscriptionService;
pub use tags::TagService;

use kernel::error::app_error::AppResult;
use platform::upstream::{Backend, BackendRequest};
use serde_json::Value;

/// Perform the call and hand back the payload untouched.
///
/// Responses are relayed, never decoded into request-side DTOs: unknown
/// keys, `null`s and the backend's own key names all reach the caller.
pub(crate) async fn fetch<B: Backend>(backend: &B, request: BackendRequest) -> AppResult<Value> {
    backend.send(request).await?.json()
}

/// Perform the call and discard the payload (deletes)
pub(crate) async fn execute<B: Backend>(backend: &B, request: BackendRequest) -> AppResult<()> {
    backend.send(request).await.map(|_| ())
}
