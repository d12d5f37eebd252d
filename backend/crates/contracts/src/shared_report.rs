//! Shared influencer report contracts
//!
//! Share links are built by the gateway itself, so these shapes use the
//! dashboard's camelCase rather than the backend's snake_case.

use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Id;

/// POST /api/v0/shared-reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareReportRequest {
    #[serde(default)]
    pub campaign_id: Option<Id>,
    #[serde(default)]
    pub report_data: Option<Value>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Validated share request
#[derive(Debug, Clone, PartialEq)]
pub struct NewSharedReport {
    pub campaign_id: String,
    pub report_data: Value,
    pub expires_at: DateTime<Utc>,
}

impl ShareReportRequest {
    /// All three fields are required and `expiresAt` must be in the future
    pub fn validate(self, now: DateTime<Utc>) -> AppResult<NewSharedReport> {
        let campaign_id = self
            .campaign_id
            .filter(|id| !id.is_blank())
            .ok_or_else(|| AppError::bad_request("campaignId is required"))?;
        let report_data = self
            .report_data
            .filter(|data| !data.is_null())
            .ok_or_else(|| AppError::bad_request("reportData is required"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| AppError::bad_request("expiresAt is required"))?;

        if expires_at <= now {
            return Err(AppError::bad_request("expiresAt must be in the future"));
        }

        Ok(NewSharedReport {
            campaign_id: campaign_id.to_string(),
            report_data,
            expires_at,
        })
    }
}

/// Stored report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedReport {
    pub campaign_id: String,
    pub report_data: Value,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SharedReport {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// `{ success: true, shareUrl, expiresAt }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareReportResponse {
    pub success: bool,
    pub share_url: String,
    pub expires_at: DateTime<Utc>,
}
