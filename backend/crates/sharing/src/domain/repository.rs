//! Repository Traits
//!
//! Interfaces for shared-report persistence. Implementations are in the
//! infrastructure layer.

use chrono::{DateTime, Utc};
use contracts::shared_report::SharedReport;

use crate::error::SharingResult;

/// Shared-report store, keyed by campaign id
#[trait_variant::make(SharedReportRepository: Send)]
pub trait LocalSharedReportRepository {
    /// Store a report, replacing any earlier report for the campaign
    async fn put(&self, report: &SharedReport) -> SharingResult<()>;

    /// Fetch a report whether or not it has expired
    async fn get(&self, campaign_id: &str) -> SharingResult<Option<SharedReport>>;

    /// Delete the campaign's report only if the stored one is expired at
    /// `now`, as one atomic step. Returns whether a report was removed; a
    /// report replaced since it was read is left alone.
    async fn delete_if_expired(
        &self,
        campaign_id: &str,
        now: DateTime<Utc>,
    ) -> SharingResult<bool>;

    /// Delete every report expired at `now`
    async fn cleanup_expired(&self, now: DateTime<Utc>) -> SharingResult<u64>;
}
