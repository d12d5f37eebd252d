use contracts::shared_report::{ShareReportRequest, ShareReportResponse, SharedReport};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct SharedReports<'a> {
    pub(crate) client: &'a ApiClient,
}

impl SharedReports<'_> {
    pub async fn share(&self, body: &ShareReportRequest) -> ClientResult<ShareReportResponse> {
        self.client
            .send(Method::POST, "/api/v0/shared-reports", body)
            .await
    }

    /// Read a report through its share link; needs no access token
    pub async fn open(&self, campaign_id: &str) -> ClientResult<SharedReport> {
        self.client
            .public_get(&format!("/api/v0/shared-reports/{campaign_id}"), &[])
            .await
    }
}
