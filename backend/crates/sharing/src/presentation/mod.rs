//! Presentation Layer
//!
//! HTTP handlers and routing for public sessions and shared reports.

pub mod handlers;
pub mod router;

pub use handlers::{SharingBackend, SharingState};
pub use router::sharing_router;
