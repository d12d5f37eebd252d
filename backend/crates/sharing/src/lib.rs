//! Sharing - public access for people outside the dashboard
//!
//! Clean Architecture structure:
//! - `domain/` - Shared-report repository trait
//! - `application/` - Public session views, shared-report lifecycle
//! - `infra/` - In-memory and Postgres report stores
//! - `presentation/` - HTTP handlers, router
//!
//! Public views are authorized by a capability token issued by the backend;
//! the gateway only checks that one was supplied. Shared reports are owned
//! by the gateway and expire on read.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::SharingConfig;
pub use domain::repository::SharedReportRepository;
pub use error::{SharingError, SharingResult};
pub use infra::{InMemoryReportStore, PgSharedReportRepository};
pub use presentation::{SharingBackend, SharingState, sharing_router};

#[cfg(test)]
mod tests;
