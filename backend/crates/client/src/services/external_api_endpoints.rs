use contracts::external_api_endpoint::{ExternalApiEndpoint, UpsertExternalApiEndpointRequest};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct ExternalApiEndpoints<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ExternalApiEndpoints<'_> {
    pub async fn list(&self) -> ClientResult<Vec<ExternalApiEndpoint>> {
        self.client.get("/api/v0/external-api-endpoints", &[]).await
    }

    pub async fn create(
        &self,
        body: &UpsertExternalApiEndpointRequest,
    ) -> ClientResult<ExternalApiEndpoint> {
        self.client
            .send(Method::POST, "/api/v0/external-api-endpoints", body)
            .await
    }

    pub async fn replace(
        &self,
        id: &str,
        body: &UpsertExternalApiEndpointRequest,
    ) -> ClientResult<ExternalApiEndpoint> {
        self.client
            .send(
                Method::PUT,
                &format!("/api/v0/external-api-endpoints/{id}"),
                body,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/v0/external-api-endpoints/{id}"))
            .await
    }
}
