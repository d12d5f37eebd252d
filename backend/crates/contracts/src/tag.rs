//! Tag contracts

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_text};

/// Tag row as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v0/tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreateTagRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", Some(&self.name))
    }
}

/// POST /api/v0/campaign-influencers/{id}/tags
///
/// Attach an existing tag by id, or create-and-attach by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTagRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl AddTagRequest {
    pub fn validate(&self) -> AppResult<()> {
        let has_id = self.tag_id.as_ref().is_some_and(|id| !id.is_blank());
        let has_name = self
            .tag_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        if has_id || has_name {
            Ok(())
        } else {
            Err(AppError::bad_request("Either tag_id or tag_name is required"))
        }
    }
}

/// POST /api/v0/tags/by-ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagIdsRequest {
    #[serde(default)]
    pub ids: Vec<Id>,
}
