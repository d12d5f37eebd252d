//! HTTP Handlers
//!
//! One module per resource. Handlers are generic over the transport so the
//! router can be driven by a fake backend in tests.

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

use std::sync::Arc;

use platform::media::MediaFetcher;
use platform::upstream::Backend;

/// Transport the gateway routes can run on
pub trait GatewayBackend: Backend + MediaFetcher + Send + Sync + 'static {}

impl<T> GatewayBackend for T where T: Backend + MediaFetcher + Send + Sync + 'static {}

/// Shared state for gateway handlers
pub struct GatewayState<B> {
    pub backend: Arc<B>,
}

impl<B> GatewayState<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

impl<B> Clone for GatewayState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}
