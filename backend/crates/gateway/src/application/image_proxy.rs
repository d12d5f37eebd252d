//! Image Proxy Service
//!
//! Fetches remote images (influencer avatars) so the dashboard can render
//! them from its own origin. The only outbound call with a timeout.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use platform::media::{FetchedMedia, MediaFetcher, MediaLimits, parse_media_url};

pub struct ImageProxyService<M> {
    fetcher: Arc<M>,
    limits: MediaLimits,
}

impl<M: MediaFetcher> ImageProxyService<M> {
    pub fn new(fetcher: Arc<M>) -> Self {
        Self {
            fetcher,
            limits: MediaLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: MediaLimits) -> Self {
        self.limits = limits;
        self
    }

    pub async fn fetch(&self, raw_url: &str) -> AppResult<FetchedMedia> {
        let url = parse_media_url(raw_url)?;
        self.fetcher.fetch(url, self.limits).await
    }
}
