//! PostgreSQL Repository Implementation

use chrono::{DateTime, TimeZone, Utc};
use contracts::shared_report::SharedReport;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::repository::SharedReportRepository;
use crate::error::{SharingError, SharingResult};

/// PostgreSQL-backed shared-report store
#[derive(Clone)]
pub struct PgSharedReportRepository {
    pool: PgPool,
}

impl PgSharedReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SharedReportRepository for PgSharedReportRepository {
    async fn put(&self, report: &SharedReport) -> SharingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shared_reports (campaign_id, report_data, expires_at_ms, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (campaign_id)
            DO UPDATE SET
                report_data = EXCLUDED.report_data,
                expires_at_ms = EXCLUDED.expires_at_ms,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&report.campaign_id)
        .bind(Json(&report.report_data))
        .bind(report.expires_at.timestamp_millis())
        .bind(report.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            campaign_id = %report.campaign_id,
            expires_at = %report.expires_at,
            "Shared report stored"
        );

        Ok(())
    }

    async fn get(&self, campaign_id: &str) -> SharingResult<Option<SharedReport>> {
        let row = sqlx::query_as::<_, SharedReportRow>(
            r#"
            SELECT campaign_id, report_data, expires_at_ms, created_at
            FROM shared_reports
            WHERE campaign_id = $1
            "#,
        )
        .bind(campaign_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SharedReportRow::into_report).transpose()
    }

    async fn delete_if_expired(
        &self,
        campaign_id: &str,
        now: DateTime<Utc>,
    ) -> SharingResult<bool> {
        let deleted = sqlx::query(
            "DELETE FROM shared_reports WHERE campaign_id = $1 AND expires_at_ms <= $2",
        )
        .bind(campaign_id)
        .bind(now.timestamp_millis())
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(campaign_id = %campaign_id, deleted, "Expired shared report deleted");
        Ok(deleted > 0)
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> SharingResult<u64> {
        let deleted = sqlx::query("DELETE FROM shared_reports WHERE expires_at_ms <= $1")
            .bind(now.timestamp_millis())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(reports = deleted, "Cleaned up expired shared reports");
        Ok(deleted)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SharedReportRow {
    campaign_id: String,
    report_data: Json<Value>,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SharedReportRow {
    fn into_report(self) -> SharingResult<SharedReport> {
        let expires_at = Utc
            .timestamp_millis_opt(self.expires_at_ms)
            .single()
            .ok_or_else(|| {
                SharingError::Database(sqlx::Error::Decode(
                    format!("invalid expires_at_ms: {}", self.expires_at_ms).into(),
                ))
            })?;

        Ok(SharedReport {
            campaign_id: self.campaign_id,
            report_data: self.report_data.0,
            expires_at,
            created_at: self.created_at,
        })
    }
}
