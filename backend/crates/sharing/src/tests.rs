//! Router tests for public sessions and shared reports

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use platform::bearer::INTERNAL_TOKEN_HEADER;
use platform::testing::RecordingBackend;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{InMemoryReportStore, SharedReportRepository, SharingConfig, sharing_router};

const SYSTEM_TOKEN: &str = "system-secret";

fn app(backend: &RecordingBackend, store: &InMemoryReportStore) -> Router {
    let config = SharingConfig {
        internal_system_token: Some(SYSTEM_TOKEN.to_string()),
        public_base_url: "https://app.example.com".to_string(),
        ..SharingConfig::default()
    };
    sharing_router(
        Arc::new(backend.clone()),
        Arc::new(store.clone()),
        config,
    )
}

fn request(method: Method, uri: &str, body: Option<Value>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(_) => builder.header(header::CONTENT_TYPE, "application/json"),
        None => builder,
    }
}

fn with_body(builder: axum::http::request::Builder, body: Option<Value>) -> Request<Body> {
    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    call(app, with_body(request(Method::GET, uri, None), None)).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let builder = request(Method::POST, uri, Some(body.clone()));
    call(app, with_body(builder, Some(body))).await
}

fn session_json() -> Value {
    json!({
        "session_token": "pub_abc",
        "resource_type": "campaign",
        "resource_id": 42,
        "expires_at": "2030-01-01T00:00:00Z",
        "permissions": { "can_view": true, "can_comment": true }
    })
}

mod public_sessions {
    use super::*;

    #[tokio::test]
    async fn test_create_requires_credentials() {
        let backend = RecordingBackend::json(201, session_json());
        let store = InMemoryReportStore::new();

        let (status, body) = post(
            app(&backend, &store),
            "/api/v0/public-sessions",
            json!({ "resource_type": "campaign", "resource_id": 42 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_internal_token_is_forwarded_as_bearer() {
        let backend = RecordingBackend::json(201, session_json());
        let store = InMemoryReportStore::new();
        let body = json!({ "resource_type": "campaign", "resource_id": 42 });

        let builder = request(Method::POST, "/api/v0/public-sessions", Some(body.clone()))
            .header(INTERNAL_TOKEN_HEADER, SYSTEM_TOKEN);
        let (status, response) = call(app(&backend, &store), with_body(builder, Some(body))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["session_token"], "pub_abc");
        assert_eq!(backend.only_call().token.as_deref(), Some(SYSTEM_TOKEN));
    }

    #[tokio::test]
    async fn test_create_requires_resource_id() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();
        let body = json!({ "resource_type": "campaign" });

        let builder = request(Method::POST, "/api/v0/public-sessions", Some(body.clone()))
            .header(header::AUTHORIZATION, "Bearer user-token");
        let (status, response) = call(app(&backend, &store), with_body(builder, Some(body))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "resource_id is required");
        assert_eq!(backend.call_count(), 0);
    }
}

mod public_views {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_never_reaches_backend() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        for uri in [
            "/api/v0/public/session",
            "/api/v0/public/campaign",
            "/api/v0/public/comments?token=",
            "/api/v0/public/price-negotiations?campaign_influencer_id=3",
        ] {
            let (status, body) = get(app(&backend, &store), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "Session token is required", "{uri}");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_session_view() {
        let backend = RecordingBackend::json(200, session_json());
        let store = InMemoryReportStore::new();

        let (status, body) = get(app(&backend, &store), "/api/v0/public/session?token=pub_abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["permissions"]["can_comment"], true);
        assert_eq!(backend.only_call().query_value("token"), Some("pub_abc"));
    }

    #[tokio::test]
    async fn test_session_payload_is_wrapped_unchanged() {
        let payload = json!({
            "session_token": "pub_abc",
            "resource_type": "campaign",
            "resource_id": 42,
            "expires_at": "2030-01-01T00:00:00",
            "permissions": { "can_view": true },
            "session_metadata": null,
            "brand_name": "Acme"
        });
        let backend = RecordingBackend::json(200, payload.clone());
        let store = InMemoryReportStore::new();

        let (status, body) = get(app(&backend, &store), "/api/v0/public/session?token=pub_abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": payload }));
    }

    #[tokio::test]
    async fn test_public_campaign_is_wrapped_unchanged() {
        let payload = json!({
            "data": { "id": 7, "name": null, "influencers": [] },
            "can_comment": false,
            "branding": { "logo_url": null }
        });
        let backend = RecordingBackend::json(200, payload.clone());
        let store = InMemoryReportStore::new();

        let (status, body) = get(app(&backend, &store), "/api/v0/public/campaign?token=pub_abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": payload }));
    }

    #[tokio::test]
    async fn test_expired_token_answers_401_with_hint() {
        let backend = RecordingBackend::error(
            400,
            json!({ "detail": "Invalid or expired session token" }),
        );
        let store = InMemoryReportStore::new();

        let (status, body) = get(app(&backend, &store), "/api/v0/public/campaign?token=pub_old").await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid or expired session token");
    }

    #[tokio::test]
    async fn test_missing_permission_answers_403() {
        let backend = RecordingBackend::error(
            400,
            json!({ "detail": "Commenting is not permitted for this session" }),
        );
        let store = InMemoryReportStore::new();

        let (status, _) = post(
            app(&backend, &store),
            "/api/v0/public/comments",
            json!({ "token": "pub_abc", "content": "Looks good", "commenter_name": "Brand" }),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_post_comment_forwards_token_in_body() {
        let backend = RecordingBackend::json(201, json!({ "id": 9, "content": "Looks good" }));
        let store = InMemoryReportStore::new();

        let (status, body) = post(
            app(&backend, &store),
            "/api/v0/public/comments",
            json!({ "token": "pub_abc", "content": "Looks good", "commenter_name": "Brand" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 9);
        let call = backend.only_call();
        assert_eq!(call.token, None);
        assert_eq!(call.body.unwrap()["token"], "pub_abc");
    }

    #[tokio::test]
    async fn test_commenter_name_is_optional() {
        let backend = RecordingBackend::json(201, json!({ "id": 10, "content": "Nice" }));
        let store = InMemoryReportStore::new();
        let comment = json!({ "token": "pub_abc", "content": "Nice" });

        let (status, _) = post(app(&backend, &store), "/api/v0/public/comments", comment.clone()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(backend.only_call().body, Some(comment));
    }

    #[tokio::test]
    async fn test_price_negotiations_require_campaign_influencer() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let (status, body) = get(
            app(&backend, &store),
            "/api/v0/public/price-negotiations?token=pub_abc",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "campaign_influencer_id is required");
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_counter_needs_positive_price() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let (status, _) = post(
            app(&backend, &store),
            "/api/v0/public/price-negotiations",
            json!({
                "token": "pub_abc",
                "campaign_influencer_id": 3,
                "action": "counter",
                "counter_price": 0
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_approve_price() {
        let backend = RecordingBackend::json(200, json!({ "status": "approved" }));
        let store = InMemoryReportStore::new();

        let (status, body) = post(
            app(&backend, &store),
            "/api/v0/public/price-negotiations",
            json!({ "token": "pub_abc", "campaign_influencer_id": 3, "action": "approve" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "approved");
    }
}

mod shared_reports {
    use super::*;
    use contracts::shared_report::SharedReport;

    fn share_body(expires_in: Duration) -> Value {
        json!({
            "campaignId": 15,
            "reportData": { "influencers": [{ "username": "ana" }] },
            "expiresAt": Utc::now() + expires_in,
        })
    }

    async fn share(app: Router, body: Value) -> (StatusCode, Value) {
        let builder = request(Method::POST, "/api/v0/shared-reports", Some(body.clone()))
            .header(header::AUTHORIZATION, "Bearer user-token");
        call(app, with_body(builder, Some(body))).await
    }

    #[tokio::test]
    async fn test_share_requires_bearer() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let (status, body) = post(
            app(&backend, &store),
            "/api/v0/shared-reports",
            share_body(Duration::days(7)),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_share_and_open() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let (status, body) = share(app(&backend, &store), share_body(Duration::days(7))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["shareUrl"],
            "https://app.example.com/shared/influencer-report/15"
        );

        let (status, body) = get(app(&backend, &store), "/api/v0/shared-reports/15").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["reportData"]["influencers"][0]["username"], "ana");
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_past_expiry_is_rejected() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let (status, body) = share(app(&backend, &store), share_body(Duration::hours(-1))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "expiresAt must be in the future");
    }

    #[tokio::test]
    async fn test_unknown_report() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let (status, body) = get(app(&backend, &store), "/api/v0/shared-reports/404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Report not found");
    }

    #[tokio::test]
    async fn test_expired_report_is_gone_once_then_not_found() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();
        let uri = "/api/v0/shared-reports/15";

        let (status, _) = get(app(&backend, &store), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let now = Utc::now();
        store
            .put(&SharedReport {
                campaign_id: "15".to_string(),
                report_data: json!({ "influencers": [] }),
                expires_at: now - Duration::minutes(1),
                created_at: now - Duration::days(1),
            })
            .await
            .unwrap();

        let (status, body) = get(app(&backend, &store), uri).await;
        assert_eq!(status, StatusCode::GONE);
        assert_eq!(body["error"], "This shared report has expired");
        assert!(body["action"].is_string());
        assert!(store.is_empty().await);

        let (status, body) = get(app(&backend, &store), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Report not found");
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let backend = RecordingBackend::default();
        let store = InMemoryReportStore::new();

        let builder = request(Method::POST, "/api/v0/shared-reports", None)
            .header(header::AUTHORIZATION, "Bearer user-token")
            .header(header::CONTENT_TYPE, "application/json");
        let request = builder.body(Body::from("{not json")).unwrap();
        let (status, _) = call(app(&backend, &store), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
