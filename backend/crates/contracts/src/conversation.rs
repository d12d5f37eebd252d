//! AI chat contracts
//!
//! Conversations are page-number paginated; messages inside a
//! conversation use an opaque cursor handed out by the backend.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_text};

/// Conversations list allows smaller pages than the other lists
pub const MAX_CONVERSATION_PAGE_SIZE: u32 = 50;
pub const DEFAULT_MESSAGE_LIMIT: u32 = 50;
pub const MAX_MESSAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v1/conversations - every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v1/conversations/{id}/messages[/stream]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl SendMessageRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_text("content", Some(&self.content))
    }
}

/// One page of messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorPage<T> {
    #[serde(alias = "messages")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Validated `cursor` / `limit` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRequest {
    pub cursor: Option<String>,
    pub limit: u32,
}

impl CursorRequest {
    /// `limit` must lie in `1..=100` and defaults to 50; a blank cursor
    /// means "from the newest message".
    pub fn parse(cursor: Option<&str>, limit: Option<&str>) -> AppResult<Self> {
        let limit = match limit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::bad_request("limit must be an integer"))?,
            None => i64::from(DEFAULT_MESSAGE_LIMIT),
        };
        if !(1..=i64::from(MAX_MESSAGE_LIMIT)).contains(&limit) {
            return Err(AppError::bad_request(format!(
                "limit must be between 1 and {MAX_MESSAGE_LIMIT}"
            )));
        }

        Ok(Self {
            cursor: cursor
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            limit: limit as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cursor_defaults() {
        let request = CursorRequest::parse(None, None).unwrap();
        assert_eq!(request, CursorRequest { cursor: None, limit: 50 });

        let request = CursorRequest::parse(Some("  "), Some("100")).unwrap();
        assert_eq!(request.cursor, None);
        assert_eq!(request.limit, 100);
    }

    #[test]
    fn test_cursor_limit_bounds() {
        assert!(CursorRequest::parse(None, Some("0")).is_err());
        assert!(CursorRequest::parse(None, Some("101")).is_err());
        assert!(CursorRequest::parse(None, Some("ten")).is_err());
    }

    #[test]
    fn test_cursor_page_accepts_messages_key() {
        let page: CursorPage<ChatMessage> = serde_json::from_value(json!({
            "messages": [{ "id": "m1", "role": "user", "content": "hi" }],
            "next_cursor": "m0",
            "has_more": true
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_cursor.as_deref(), Some("m0"));
    }

    #[test]
    fn test_message_requires_content() {
        let request: SendMessageRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.validate().is_err());
    }
}
