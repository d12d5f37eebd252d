//! Domain Layer
//!
//! Shared-report storage interface. Reports themselves are the
//! `contracts::shared_report::SharedReport` transfer shape.

pub mod repository;

pub use repository::{LocalSharedReportRepository, SharedReportRepository};
