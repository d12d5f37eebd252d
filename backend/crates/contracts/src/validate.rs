//! Field checks shared by request DTOs

use kernel::error::app_error::{AppError, AppResult};

/// Reject missing, empty or whitespace-only text
pub fn require_text(field: &'static str, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(AppError::bad_request(format!("{field} is required"))),
    }
}

/// Reject non-finite, zero and negative amounts
pub fn require_positive(field: &'static str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::bad_request(format!(
            "{field} must be a positive number"
        )))
    }
}
