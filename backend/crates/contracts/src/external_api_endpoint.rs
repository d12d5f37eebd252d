//! External API endpoint contracts
//!
//! Admin-registered third-party endpoints the backend calls on the
//! platform's behalf.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_text};

pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalApiEndpoint {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of POST and PUT /api/v0/external-api-endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertExternalApiEndpointRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub http_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl UpsertExternalApiEndpointRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", Some(&self.name))?;
        require_text("url", Some(&self.url))?;

        let url = self.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::bad_request("url must start with http:// or https://"));
        }

        let method = self.http_method.trim().to_ascii_uppercase();
        if !HTTP_METHODS.contains(&method.as_str()) {
            return Err(AppError::bad_request(format!(
                "Invalid http_method. Must be one of: {}",
                HTTP_METHODS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> UpsertExternalApiEndpointRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_endpoint() {
        let r = request(json!({
            "name": "Audience API", "url": "https://audience.example.com/v2",
            "http_method": "post", "headers": { "X-Key": "abc" }
        }));
        assert!(r.validate().is_ok());
        assert!(r.extra.contains_key("headers"));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(request(json!({ "url": "https://a.b", "http_method": "GET" })).validate().is_err());
        assert!(request(json!({ "name": "x", "url": "ftp://a.b", "http_method": "GET" })).validate().is_err());
        assert!(request(json!({ "name": "x", "url": "https://a.b", "http_method": "TRACE" })).validate().is_err());
        assert!(request(json!({ "name": "x", "url": "https://a.b" })).validate().is_err());
    }
}
