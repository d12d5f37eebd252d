//! Comment contracts

use kernel::error::app_error::AppResult;
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_text};

/// Comment row as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v0/campaigns/{id}/comments
///
/// `is_private` defaults to `false` and is always forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_influencer_id: Option<Id>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("content", Some(&self.content))
    }
}

/// PATCH /api/v0/comments/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl UpdateCommentRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("content", Some(&self.content))
    }
}
