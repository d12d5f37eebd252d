//! Campaign contracts

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_text};

/// Campaign row as returned by the backend.
///
/// Every field is optional: update acks such as `{"message":"updated"}`
/// decode too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v0/campaigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreateCampaignRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", Some(&self.name))
    }
}

/// PATCH /api/v0/campaigns/{id} - partial update, forwarded as sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCampaignRequest {
    #[serde(flatten)]
    pub fields: Extra,
}

impl UpdateCampaignRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.fields.is_empty() {
            return Err(AppError::bad_request("No fields to update"));
        }
        Ok(())
    }
}
