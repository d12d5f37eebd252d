//! Social account OAuth contracts
//!
//! The gateway only relays the authorize URL and the provider callback;
//! the token exchange happens in the backend.

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Instagram,
    Facebook,
    Tiktok,
    Youtube,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Instagram => "instagram",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Tiktok => "tiktok",
            OAuthProvider::Youtube => "youtube",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" => Ok(OAuthProvider::Instagram),
            "facebook" => Ok(OAuthProvider::Facebook),
            "tiktok" => Ok(OAuthProvider::Tiktok),
            "youtube" => Ok(OAuthProvider::Youtube),
            _ => Err(AppError::bad_request(format!("Unsupported provider: {s}"))),
        }
    }
}

/// Body posted by the dashboard after the provider redirect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthCallbackRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Callback as forwarded to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthCallbackForward {
    pub code: String,
    pub state: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl OAuthCallbackRequest {
    /// `code` is required; a missing `state` is sent as `""`
    pub fn into_forward(self) -> AppResult<OAuthCallbackForward> {
        let code = self
            .code
            .filter(|code| !code.trim().is_empty())
            .ok_or_else(|| AppError::bad_request("Authorization code is required"))?;

        Ok(OAuthCallbackForward {
            code,
            state: self.state.unwrap_or_default(),
            extra: self.extra,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthAuthorizeUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Connected social account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
