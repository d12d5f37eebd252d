use contracts::reassignment_reason::{
    CreateReassignmentReasonRequest, ReassignmentReason, UpdateReassignmentReasonRequest,
};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientResult;

pub struct ReassignmentReasons<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ReassignmentReasons<'_> {
    pub async fn list(&self, is_active: Option<bool>) -> ClientResult<Vec<ReassignmentReason>> {
        let query: Vec<(&str, String)> = is_active
            .map(|active| vec![("is_active", active.to_string())])
            .unwrap_or_default();
        self.client.get("/api/v0/reassignment-reasons", &query).await
    }

    pub async fn create(
        &self,
        body: &CreateReassignmentReasonRequest,
    ) -> ClientResult<ReassignmentReason> {
        self.client
            .send(Method::POST, "/api/v0/reassignment-reasons", body)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        body: &UpdateReassignmentReasonRequest,
    ) -> ClientResult<ReassignmentReason> {
        self.client
            .send(
                Method::PATCH,
                &format!("/api/v0/reassignment-reasons/{id}"),
                body,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/v0/reassignment-reasons/{id}"))
            .await
    }
}
