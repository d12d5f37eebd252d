//! Shared Report Use Cases
//!
//! Lifecycle: created by an authenticated user with an explicit expiry,
//! read by anyone holding the link until then. A read after expiry deletes
//! the report and answers 410; later reads find nothing and answer 404.
//! A report re-shared between the read and the delete is kept and served.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use contracts::shared_report::{ShareReportRequest, ShareReportResponse, SharedReport};
use kernel::error::app_error::AppError;

use crate::application::config::SharingConfig;
use crate::domain::repository::SharedReportRepository;
use crate::error::{SharingError, SharingResult};

pub struct SharedReportService<R> {
    repo: Arc<R>,
    config: Arc<SharingConfig>,
}

impl<R: SharedReportRepository> SharedReportService<R> {
    pub fn new(repo: Arc<R>, config: Arc<SharingConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn share(
        &self,
        request: ShareReportRequest,
        now: DateTime<Utc>,
    ) -> SharingResult<ShareReportResponse> {
        let new_report = request.validate(now)?;

        let max_ttl = self.config.shared_report_max_ttl;
        let ttl = (new_report.expires_at - now).to_std().unwrap_or_default();
        if ttl > max_ttl {
            return Err(AppError::bad_request(format!(
                "expiresAt must be within {} hours",
                max_ttl.as_secs() / 3600
            ))
            .into());
        }

        let report = SharedReport {
            campaign_id: new_report.campaign_id,
            report_data: new_report.report_data,
            expires_at: new_report.expires_at,
            created_at: now,
        };
        self.repo.put(&report).await?;

        Ok(ShareReportResponse {
            success: true,
            share_url: self.config.share_url(&report.campaign_id),
            expires_at: report.expires_at,
        })
    }

    pub async fn open(&self, campaign_id: &str, now: DateTime<Utc>) -> SharingResult<SharedReport> {
        let report = self
            .repo
            .get(campaign_id)
            .await?
            .ok_or(SharingError::ReportNotFound)?;

        if !report.is_expired(now) {
            return Ok(report);
        }

        if self.repo.delete_if_expired(campaign_id, now).await? {
            tracing::info!(campaign_id = %campaign_id, "Expired shared report removed on read");
            return Err(SharingError::ReportExpired);
        }

        // Replaced or removed since the read
        match self.repo.get(campaign_id).await? {
            Some(fresh) if !fresh.is_expired(now) => Ok(fresh),
            _ => Err(SharingError::ReportNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryReportStore;
    use chrono::Duration;
    use kernel::error::kind::ErrorKind;
    use serde_json::json;

    fn service(store: &InMemoryReportStore) -> SharedReportService<InMemoryReportStore> {
        SharedReportService::new(Arc::new(store.clone()), Arc::new(SharingConfig::default()))
    }

    fn request(expires_at: DateTime<Utc>) -> ShareReportRequest {
        serde_json::from_value(json!({
            "campaignId": "15",
            "reportData": { "influencers": [{ "username": "ana" }] },
            "expiresAt": expires_at,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_share_then_open() {
        let store = InMemoryReportStore::new();
        let service = service(&store);
        let now = Utc::now();

        let response = service
            .share(request(now + Duration::days(7)), now)
            .await
            .unwrap();
        assert!(response.share_url.ends_with("/shared/influencer-report/15"));

        let report = service.open("15", now + Duration::days(1)).await.unwrap();
        assert_eq!(report.report_data["influencers"][0]["username"], "ana");
    }

    #[tokio::test]
    async fn test_missing_report() {
        let store = InMemoryReportStore::new();
        let err = service(&store).open("99", Utc::now()).await.unwrap_err();
        assert!(matches!(err, SharingError::ReportNotFound));
    }

    #[tokio::test]
    async fn test_expired_report_is_gone_once_then_not_found() {
        let store = InMemoryReportStore::new();
        let service = service(&store);
        let now = Utc::now();

        service
            .share(request(now + Duration::hours(1)), now)
            .await
            .unwrap();

        let later = now + Duration::hours(2);
        let err = service.open("15", later).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Gone);
        assert!(store.is_empty().await);

        let err = service.open("15", later).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    /// Serves a stale copy on the first read, as if a re-share landed
    /// right after it
    struct ReshareDuringRead {
        store: InMemoryReportStore,
        stale: std::sync::Mutex<Option<SharedReport>>,
    }

    impl SharedReportRepository for ReshareDuringRead {
        async fn put(&self, report: &SharedReport) -> SharingResult<()> {
            self.store.put(report).await
        }

        async fn get(&self, campaign_id: &str) -> SharingResult<Option<SharedReport>> {
            let stale = self.stale.lock().unwrap().take();
            match stale {
                Some(report) => Ok(Some(report)),
                None => self.store.get(campaign_id).await,
            }
        }

        async fn delete_if_expired(
            &self,
            campaign_id: &str,
            now: DateTime<Utc>,
        ) -> SharingResult<bool> {
            self.store.delete_if_expired(campaign_id, now).await
        }

        async fn cleanup_expired(&self, now: DateTime<Utc>) -> SharingResult<u64> {
            self.store.cleanup_expired(now).await
        }
    }

    #[tokio::test]
    async fn test_reshare_between_read_and_delete_keeps_fresh_report() {
        let now = Utc::now();
        let store = InMemoryReportStore::new();
        let fresh = SharedReport {
            campaign_id: "15".to_string(),
            report_data: json!({ "version": 2 }),
            expires_at: now + Duration::days(1),
            created_at: now,
        };
        store.put(&fresh).await.unwrap();

        let stale = SharedReport {
            report_data: json!({ "version": 1 }),
            expires_at: now - Duration::minutes(1),
            ..fresh.clone()
        };
        let repo = ReshareDuringRead {
            store: store.clone(),
            stale: std::sync::Mutex::new(Some(stale)),
        };
        let service = SharedReportService::new(Arc::new(repo), Arc::new(SharingConfig::default()));

        let report = service.open("15", now).await.unwrap();
        assert_eq!(report.report_data["version"], 2);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_expiry_beyond_max_ttl_is_rejected() {
        let store = InMemoryReportStore::new();
        let now = Utc::now();

        let err = service(&store)
            .share(request(now + Duration::days(365)), now)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(store.is_empty().await);
    }
}
