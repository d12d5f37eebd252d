//! Application Layer
//!
//! Public-session use cases and the shared-report lifecycle.

pub mod config;
pub mod public_access;
pub mod shared_reports;

// Re-exports
pub use config::SharingConfig;
pub use public_access::PublicAccessService;
pub use shared_reports::SharedReportService;
