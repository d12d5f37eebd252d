//! Reassignment reason contracts
//!
//! Admin-managed catalogue of reasons an outreach agent can give when a
//! campaign influencer is handed to someone else.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReassignmentReason {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v0/reassignment-reasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReassignmentReasonRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreateReassignmentReasonRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("code", Some(&self.code))?;
        require_text("name", Some(&self.name))
    }
}

/// PATCH /api/v0/reassignment-reasons/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReassignmentReasonRequest {
    #[serde(flatten)]
    pub fields: Extra,
}

impl UpdateReassignmentReasonRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.fields.is_empty() {
            return Err(AppError::bad_request("No fields to update"));
        }
        Ok(())
    }
}

/// Parse the `is_active` list filter
pub fn parse_active_filter(raw: Option<&str>) -> AppResult<Option<bool>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(_) => Err(AppError::bad_request("is_active must be 'true' or 'false'")),
    }
}
