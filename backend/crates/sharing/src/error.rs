//! Sharing Error Types
//!
//! Errors of the public session layer and the shared-report store. They
//! integrate with the unified `kernel::error::AppError` system.

use axum::response::Response;
use kernel::envelope::ErrorStyle;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Sharing result type alias
pub type SharingResult<T> = Result<T, SharingError>;

/// Hint shown with expired or invalid public links
pub const REFRESH_ACTION: &str = "Please refresh the page or request a new link";

#[derive(Debug, Error)]
pub enum SharingError {
    /// No bearer token (and no accepted internal token)
    #[error("Unauthorized: missing or invalid authorization token")]
    Unauthenticated,

    /// Body is not the JSON the route expects
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// No report stored for this campaign
    #[error("Report not found")]
    ReportNotFound,

    /// Report existed but its link has expired
    #[error("This shared report has expired")]
    ReportExpired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation or upstream failure
    #[error("{0}")]
    App(#[from] AppError),
}

impl SharingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SharingError::Unauthenticated => ErrorKind::Unauthorized,
            SharingError::InvalidBody(_) => ErrorKind::BadRequest,
            SharingError::ReportNotFound => ErrorKind::NotFound,
            SharingError::ReportExpired => ErrorKind::Gone,
            SharingError::Database(_) => ErrorKind::InternalServerError,
            SharingError::App(err) => err.kind(),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            SharingError::App(err) => err,
            SharingError::Database(err) => AppError::from(err),
            SharingError::ReportExpired => {
                AppError::gone(SharingError::ReportExpired.to_string()).with_action(REFRESH_ACTION)
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SharingError::Database(e) => {
                tracing::error!(error = %e, "Shared report store error");
            }
            SharingError::App(err) if err.kind().is_server_error() => {
                tracing::error!(kind = %err.kind(), message = %err.message(), "Public request failed");
            }
            SharingError::Unauthenticated => {
                tracing::warn!("Sharing request without credentials");
            }
            _ => {
                tracing::debug!(error = %self, "Sharing error");
            }
        }
    }

    /// Render in the route's legacy envelope
    pub fn respond(self, style: ErrorStyle) -> Response {
        self.log();
        style.respond(&self.into_app_error())
    }
}

/// Re-classify an upstream failure for the public layer.
///
/// The backend reports bad capability tokens through its message text;
/// expired or invalid tokens become 401 with a refresh hint and missing
/// permissions become 403. Other errors keep the transport's kind.
pub fn classify_public_error(err: AppError) -> AppError {
    let message = err.message().to_ascii_lowercase();

    if message.contains("invalid or expired session token") || message.contains("expired") {
        err.with_kind(ErrorKind::Unauthorized)
            .with_action(REFRESH_ACTION)
    } else if message.contains("not permitted")
        || message.contains("unauthorized")
        || message.contains("permission")
    {
        err.with_kind(ErrorKind::Forbidden)
    } else {
        err
    }
}
