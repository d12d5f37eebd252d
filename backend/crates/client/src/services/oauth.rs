use contracts::oauth::{OAuthAuthorizeUrl, OAuthCallbackRequest, OAuthConnection, OAuthProvider};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct OAuth<'a> {
    pub(crate) client: &'a ApiClient,
}

impl OAuth<'_> {
    pub async fn authorize_url(&self, provider: OAuthProvider) -> ClientResult<OAuthAuthorizeUrl> {
        self.client
            .get(&format!("/api/v0/oauth/{provider}/authorize-url"), &[])
            .await
    }

    /// Hand the provider's redirect parameters to the gateway
    pub async fn callback(
        &self,
        provider: OAuthProvider,
        body: &OAuthCallbackRequest,
    ) -> ClientResult<OAuthConnection> {
        self.client
            .send(Method::POST, &format!("/api/v0/oauth/{provider}/callback"), body)
            .await
    }
}
