//! Public session contracts
//!
//! A public session token is a capability: it grants time-limited,
//! permission-gated access to one resource without a user identity. The
//! gateway only checks that a token is present; expiry and permissions are
//! enforced by the backend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_positive, require_text};

/// Named permission flags of a session. Unset flags stay unset when the
/// value is forwarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_comment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_negotiate_price: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PublicPermissions {
    pub fn can_view(&self) -> bool {
        self.can_view.unwrap_or(false)
    }

    pub fn can_comment(&self) -> bool {
        self.can_comment.unwrap_or(false)
    }

    pub fn can_negotiate_price(&self) -> bool {
        self.can_negotiate_price.unwrap_or(false)
    }
}

/// Session as reported by the backend. Decoding is lenient: the backend
/// owns validity, so a typed view never turns a good answer into an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicSession {
    #[serde(default)]
    pub session_token: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<Id>,
    /// Raw timestamp; see [`PublicSession::expires_at`]
    #[serde(default, rename = "expires_at", skip_serializing_if = "Option::is_none")]
    pub expires_at_raw: Option<serde_json::Value>,
    #[serde(default)]
    pub permissions: PublicPermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_metadata: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PublicSession {
    /// Expiry as RFC 3339, or a naive timestamp read as UTC
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.expires_at_raw.as_ref()?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|at| at.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|at| at.and_utc())
            })
            .ok()
    }

    /// `false` when the expiry is missing or unreadable
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }
}

/// POST /api/v0/public-sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePublicSessionRequest {
    #[serde(default)]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PublicPermissions>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreatePublicSessionRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("resource_type", Some(&self.resource_type))?;
        if self.resource_id.as_ref().is_none_or(Id::is_blank) {
            return Err(AppError::bad_request("resource_id is required"));
        }
        Ok(())
    }
}

/// Presence check for the capability token
pub fn require_token(token: Option<&str>) -> AppResult<&str> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::bad_request("Session token is required"))
}

/// POST /api/v0/public/comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicCommentRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commenter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commenter_email: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PublicCommentRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_token(Some(&self.token))?;
        require_text("content", Some(&self.content))
    }
}

/// What an external party can answer to a proposed price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicPriceAction {
    Approve,
    Reject,
    Counter,
}

impl fmt::Display for PublicPriceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PublicPriceAction::Approve => "approve",
            PublicPriceAction::Reject => "reject",
            PublicPriceAction::Counter => "counter",
        })
    }
}

impl FromStr for PublicPriceAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(PublicPriceAction::Approve),
            "reject" => Ok(PublicPriceAction::Reject),
            "counter" => Ok(PublicPriceAction::Counter),
            _ => Err(AppError::bad_request(
                "Invalid action. Must be 'approve', 'reject' or 'counter'",
            )),
        }
    }
}

/// POST /api/v0/public/price-negotiations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicPriceResponseRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_influencer_id: Option<Id>,
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PublicPriceResponseRequest {
    pub fn validate(&self) -> AppResult<PublicPriceAction> {
        require_token(Some(&self.token))?;
        if self.campaign_influencer_id.as_ref().is_none_or(Id::is_blank) {
            return Err(AppError::bad_request("campaign_influencer_id is required"));
        }

        let action: PublicPriceAction = self.action.parse()?;
        if action == PublicPriceAction::Counter {
            let price = self.counter_price.ok_or_else(|| {
                AppError::bad_request("counter_price is required for a counter offer")
            })?;
            require_positive("counter_price", price)?;
        }
        Ok(action)
    }
}
