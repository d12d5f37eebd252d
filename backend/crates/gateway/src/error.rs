//! Gateway Error Types
//!
//! Route-level failures of the authenticated layer. Upstream and
//! validation failures arrive as an already classified [`AppError`]; the
//! gateway only adds the cases it detects itself.

use axum::response::Response;
use kernel::envelope::ErrorStyle;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Gateway result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No usable `Authorization: Bearer` header
    #[error("Unauthorized: missing or invalid authorization token")]
    MissingToken,

    /// Body is not the JSON the route expects
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Validation or upstream failure
    #[error("{0}")]
    App(#[from] AppError),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::MissingToken => ErrorKind::Unauthorized,
            GatewayError::InvalidBody(_) => ErrorKind::BadRequest,
            GatewayError::App(err) => err.kind(),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            GatewayError::App(err) => err,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self.kind() {
            kind if kind.is_server_error() => {
                tracing::error!(kind = %kind, error = %self, "Gateway request failed");
            }
            ErrorKind::Unauthorized | ErrorKind::Forbidden => {
                tracing::warn!(error = %self, "Gateway request rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Gateway request error");
            }
        }
    }

    /// Render in the legacy envelope of the route that failed
    pub fn respond(self, style: ErrorStyle) -> Response {
        self.log();
        style.respond(&self.into_app_error())
    }
}
