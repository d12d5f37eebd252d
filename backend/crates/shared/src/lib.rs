//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every gateway crate agrees on:
//! - Error kinds, the unified [`error::app_error::AppError`] and its conversions
//! - Canonical and legacy response envelopes
//! - Pagination rules and the paginated payload shape
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all routes.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
pub mod pagination;
