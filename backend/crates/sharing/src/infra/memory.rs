//! In-process shared-report store
//!
//! For local development and tests. Reports are lost on restart and are
//! not visible to other instances; deployments with more than one process
//! use [`PgSharedReportRepository`](super::PgSharedReportRepository).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use contracts::shared_report::SharedReport;
use tokio::sync::RwLock;

use crate::domain::repository::SharedReportRepository;
use crate::error::SharingResult;

#[derive(Clone, Default)]
pub struct InMemoryReportStore {
    reports: Arc<RwLock<HashMap<String, SharedReport>>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

impl SharedReportRepository for InMemoryReportStore {
    async fn put(&self, report: &SharedReport) -> SharingResult<()> {
        self.reports
            .write()
            .await
            .insert(report.campaign_id.clone(), report.clone());
        Ok(())
    }

    async fn get(&self, campaign_id: &str) -> SharingResult<Option<SharedReport>> {
        Ok(self.reports.read().await.get(campaign_id).cloned())
    }

    async fn delete_if_expired(
        &self,
        campaign_id: &str,
        now: DateTime<Utc>,
    ) -> SharingResult<bool> {
        let mut reports = self.reports.write().await;
        match reports.get(campaign_id) {
            Some(report) if report.is_expired(now) => {
                reports.remove(campaign_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> SharingResult<u64> {
        let mut reports = self.reports.write().await;
        let before = reports.len();
        reports.retain(|_, report| !report.is_expired(now));
        Ok((before - reports.len()) as u64)
    }
}
