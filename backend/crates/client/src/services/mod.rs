//! Typed service modules, one per gateway resource

pub mod campaigns;
pub mod comments;
pub mod conversations;
pub mod external_api_endpoints;
pub mod oauth;
pub mod price_negotiations;
pub mod public;
pub mod reassignment_reasons;
pub mod shared_reports;
pub mod subscriptions;
pub mod tags;

use contracts::PageRequest;

use crate::client::ApiClient;

/// `page` / `page_size` query pairs
fn page_query(page: PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.page.to_string()),
        ("page_size", page.page_size.to_string()),
    ]
}

impl ApiClient {
    pub fn campaigns(&self) -> campaigns::Campaigns<'_> {
        campaigns::Campaigns { client: self }
    }

    pub fn comments(&self) -> comments::Comments<'_> {
        comments::Comments { client: self }
    }

    pub fn conversations(&self) -> conversations::Conversations<'_> {
        conversations::Conversations { client: self }
    }

    pub fn external_api_endpoints(&self) -> external_api_endpoints::ExternalApiEndpoints<'_> {
        external_api_endpoints::ExternalApiEndpoints { client: self }
    }

    pub fn oauth(&self) -> oauth::OAuth<'_> {
        oauth::OAuth { client: self }
    }

    pub fn price_negotiations(&self) -> price_negotiations::PriceNegotiations<'_> {
        price_negotiations::PriceNegotiations { client: self }
    }

    pub fn public(&self) -> public::PublicViews<'_> {
        public::PublicViews { client: self }
    }

    pub fn reassignment_reasons(&self) -> reassignment_reasons::ReassignmentReasons<'_> {
        reassignment_reasons::ReassignmentReasons { client: self }
    }

    pub fn shared_reports(&self) -> shared_reports::SharedReports<'_> {
        shared_reports::SharedReports { client: self }
    }

    pub fn subscriptions(&self) -> subscriptions::Subscriptions<'_> {
        subscriptions::Subscriptions { client: self }
    }

    pub fn tags(&self) -> tags::Tags<'_> {
        tags::Tags { client: self }
    }
}
