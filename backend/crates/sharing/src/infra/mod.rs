//! Infrastructure Layer
//!
//! Shared-report store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryReportStore;
pub use postgres::PgSharedReportRepository;
