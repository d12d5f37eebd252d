//! Response envelopes
//!
//! Dashboard clients grew up against three different error shapes. The
//! canonical form is [`ErrorEnvelope`]; each route picks the legacy
//! [`ErrorStyle`] its consumers already parse, and the envelope renders
//! itself in that shape.

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::app_error::AppError;
use crate::error::kind::ErrorKind;

/// Wire shape of an error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStyle {
    /// RFC 7807 problem details (`type`, `title`, `status`, `detail`, `action`)
    #[default]
    Problem,
    /// `{ "error": "..." }`
    ErrorOnly,
    /// `{ "success": false, "error": "..." }`
    SuccessFlag,
}

/// Canonical error envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub kind: ErrorKind,
    pub message: String,
    pub action: Option<String>,
}

impl ErrorEnvelope {
    pub fn from_error(err: &AppError) -> Self {
        Self {
            kind: err.kind(),
            message: err.message().to_string(),
            action: err.action().map(str::to_string),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Render the body for the given legacy style
    ///
    /// `action` is only emitted when present, so legacy shapes stay
    /// byte-identical for errors without a hint.
    pub fn render(&self, style: ErrorStyle) -> Value {
        let mut body = match style {
            ErrorStyle::Problem => {
                return json!({
                    "type": format!("https://httpstatuses.io/{}", self.status_code()),
                    "title": self.kind.as_str(),
                    "status": self.status_code(),
                    "detail": self.message,
                    "action": self.action,
                });
            }
            ErrorStyle::ErrorOnly => json!({ "error": self.message }),
            ErrorStyle::SuccessFlag => json!({ "success": false, "error": self.message }),
        };

        if let (Some(action), Some(map)) = (&self.action, body.as_object_mut()) {
            map.insert("action".to_string(), Value::String(action.clone()));
        }
        body
    }
}

/// `{ "success": true, "data": T }`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessData<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessData<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true }` - acknowledgement for deletes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuccessAck {
    pub success: bool,
}

impl SuccessAck {
    pub const OK: SuccessAck = SuccessAck { success: true };
}

#[cfg(feature = "axum")]
impl ErrorStyle {
    /// Build the HTTP response for `err` in this style
    pub fn respond(self, err: &AppError) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let envelope = ErrorEnvelope::from_error(err);
        let status = StatusCode::from_u16(envelope.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(envelope.render(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_only_shape() {
        let err = AppError::not_found("Tag not found");
        let body = ErrorEnvelope::from_error(&err).render(ErrorStyle::ErrorOnly);
        assert_eq!(body, json!({ "error": "Tag not found" }));
    }

    #[test]
    fn test_success_flag_shape() {
        let err = AppError::bad_request("content is required");
        let body = ErrorEnvelope::from_error(&err).render(ErrorStyle::SuccessFlag);
        assert_eq!(
            body,
            json!({ "success": false, "error": "content is required" })
        );
    }

    #[test]
    fn test_action_is_appended_when_present() {
        let err = AppError::unauthorized("Invalid or expired session token")
            .with_action("Please refresh the page");
        let body = ErrorEnvelope::from_error(&err).render(ErrorStyle::SuccessFlag);
        assert_eq!(body["action"], "Please refresh the page");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn test_problem_shape() {
        let err = AppError::gone("Report has expired");
        let body = ErrorEnvelope::from_error(&err).render(ErrorStyle::Problem);
        assert_eq!(body["status"], 410);
        assert_eq!(body["title"], "Gone");
        assert_eq!(body["detail"], "Report has expired");
    }

    #[test]
    fn test_success_data_serializes() {
        let body = serde_json::to_value(SuccessData::new(vec![1, 2])).unwrap();
        assert_eq!(body, json!({ "success": true, "data": [1, 2] }));
        let ack = serde_json::to_value(SuccessAck::OK).unwrap();
        assert_eq!(ack, json!({ "success": true }));
    }
}
