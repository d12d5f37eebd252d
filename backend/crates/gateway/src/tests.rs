//! Router tests against a recording fake backend

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use platform::testing::{FakeReply, RecordingBackend};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::gateway_router;

const TOKEN: &str = "user-token";

fn app(backend: &RecordingBackend) -> Router {
    gateway_router(Arc::new(backend.clone()))
}

fn request(method: Method, uri: &str, body: Option<Value>, authed: bool) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if authed {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
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
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn page_body(items: Value) -> Value {
    json!({
        "items": items,
        "pagination": {
            "page": 1, "page_size": 20, "total_items": 1,
            "total_pages": 1, "has_next": false, "has_previous": false
        }
    })
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_is_rejected_before_backend() {
        let backend = RecordingBackend::default();
        let cases = [
            (Method::GET, "/api/v0/campaigns", None),
            (Method::POST, "/api/v0/campaigns", Some(json!({ "name": "Launch" }))),
            (Method::GET, "/api/v0/campaigns/1/comments", None),
            (Method::POST, "/api/v0/tags/by-ids", Some(json!({ "ids": [1] }))),
            (Method::GET, "/api/v0/subscriptions/plans", None),
            (
                Method::POST,
                "/api/v0/campaign-influencers/4/price-approval",
                Some(json!({ "action": "approve" })),
            ),
            (Method::GET, "/api/v1/conversations", None),
        ];

        for (method, uri, body) in cases {
            let (status, _) = call(app(&backend), request(method, uri, body, false)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let backend = RecordingBackend::default();
        let request = Request::builder()
            .uri("/api/v0/tags")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(app(&backend), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_token_is_forwarded() {
        let backend = RecordingBackend::json(200, json!([]));
        let (status, _) = call(app(&backend), request(Method::GET, "/api/v0/tags", None, true)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(backend.only_call().token.as_deref(), Some(TOKEN));
    }
}

mod pagination {
    use super::*;

    #[tokio::test]
    async fn test_out_of_range_pages_are_rejected() {
        let backend = RecordingBackend::default();
        for uri in [
            "/api/v0/campaigns?page=0",
            "/api/v0/campaigns?page_size=101",
            "/api/v0/campaigns/3/comments?page_size=0",
            "/api/v1/conversations?page_size=51",
            "/api/v1/conversations/c1/messages?limit=101",
        ] {
            let (status, _) = call(app(&backend), request(Method::GET, uri, None, true)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_page_is_forwarded() {
        let backend = RecordingBackend::json(200, page_body(json!([{ "id": 1, "name": "Launch" }])));
        let (status, body) = call(
            app(&backend),
            request(Method::GET, "/api/v0/campaigns?page=2&page_size=50&status=active", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["name"], "Launch");

        let call = backend.only_call();
        assert_eq!(call.query_value("page"), Some("2"));
        assert_eq!(call.query_value("page_size"), Some("50"));
        assert_eq!(call.query_value("status"), Some("active"));
    }

    #[tokio::test]
    async fn test_any_status_is_forwarded() {
        let backend = RecordingBackend::json(200, page_body(json!([])));
        let (status, _) = call(
            app(&backend),
            request(Method::GET, "/api/v0/campaigns?status=pending_review", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(backend.only_call().query_value("status"), Some("pending_review"));
    }
}

mod envelopes {
    use super::*;

    #[tokio::test]
    async fn test_comments_use_success_data() {
        let backend = RecordingBackend::json(200, json!({ "id": 5, "content": "Nice" }));
        let (status, body) = call(
            app(&backend),
            request(Method::POST, "/api/v0/campaigns/3/comments", Some(json!({ "content": "Nice" })), true),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "success": true, "data": { "id": 5, "content": "Nice" } }));
        assert_eq!(
            backend.only_call().body,
            Some(json!({ "content": "Nice", "is_private": false }))
        );
    }

    #[tokio::test]
    async fn test_comment_validation_uses_success_flag() {
        let backend = RecordingBackend::default();
        let (status, body) = call(
            app(&backend),
            request(Method::POST, "/api/v0/campaigns/3/comments", Some(json!({ "content": " " })), true),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "content is required" }));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_not_found_in_each_style() {
        let backend = RecordingBackend::error(404, json!({ "detail": "Not found" }));

        let (status, body) =
            call(app(&backend), request(Method::GET, "/api/v0/campaigns/9", None, true)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));

        let (status, body) =
            call(app(&backend), request(Method::GET, "/api/v1/conversations/9", None, true)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_unclassified_upstream_error_surfaces_message() {
        let backend =
            RecordingBackend::error(500, json!({ "error": { "message": "database exploded" } }));
        let (status, body) = call(app(&backend), request(Method::GET, "/api/v0/tags", None, true)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "database exploded");
    }

    #[tokio::test]
    async fn test_legacy_message_classification_on_server_errors() {
        let backend =
            RecordingBackend::error(500, json!({ "detail": "You do not have permission" }));
        let (status, _) = call(
            app(&backend),
            request(Method::DELETE, "/api/v0/reassignment-reasons/2", None, true),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_delete_acknowledges() {
        let backend = RecordingBackend::json(204, Value::Null);
        let (status, body) =
            call(app(&backend), request(Method::DELETE, "/api/v0/campaigns/7", None, true)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
        assert_eq!(backend.only_call().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let backend = RecordingBackend::default();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v0/tags")
            .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = call(app(&backend), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
        assert_eq!(backend.call_count(), 0);
    }
}

mod tags {
    use super::*;

    #[tokio::test]
    async fn test_add_tag_requires_id_or_name() {
        let backend = RecordingBackend::default();
        let (status, body) = call(
            app(&backend),
            request(Method::POST, "/api/v0/campaign-influencers/4/tags", Some(json!({})), true),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Either tag_id or tag_name is required");
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_ids_return_empty_list_without_backend() {
        let backend = RecordingBackend::default();
        let (status, body) = call(
            app(&backend),
            request(Method::POST, "/api/v0/tags/by-ids", Some(json!({ "ids": [] })), true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_remove_tag_path() {
        let backend = RecordingBackend::json(200, json!({}));
        let (status, _) = call(
            app(&backend),
            request(Method::DELETE, "/api/v0/campaign-influencers/4/tags/11", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(backend.only_call().path, "/api/v0/campaign-influencers/4/tags/11");
    }
}

mod price_approval {
    use super::*;

    #[tokio::test]
    async fn test_invalid_actions_are_rejected() {
        let backend = RecordingBackend::default();
        for action in [json!("accept"), json!("APPROVE"), json!(""), json!(null)] {
            let (status, _) = call(
                app(&backend),
                request(
                    Method::POST,
                    "/api/v0/campaign-influencers/4/price-approval",
                    Some(json!({ "action": action })),
                    true,
                ),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{action}");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_actions_are_forwarded_unmodified() {
        for action in ["approve", "reject"] {
            let backend = RecordingBackend::json(200, json!({ "status": action }));
            let body = json!({ "action": action, "notes": "ok", "negotiation_id": 12 });

            let (status, response) = call(
                app(&backend),
                request(
                    Method::POST,
                    "/api/v0/campaign-influencers/4/price-approval",
                    Some(body.clone()),
                    true,
                ),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(response, json!({ "status": action }));
            assert_eq!(backend.only_call().body, Some(body));
        }
    }

    #[tokio::test]
    async fn test_counter_offer_requires_positive_price() {
        let backend = RecordingBackend::default();
        let (status, body) = call(
            app(&backend),
            request(
                Method::POST,
                "/api/v0/campaign-influencers/4/price-negotiations",
                Some(json!({ "proposed_price": -5 })),
                true,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "proposed_price must be a positive number");
    }
}

mod oauth {
    use super::*;

    #[tokio::test]
    async fn test_missing_state_is_coerced() {
        let backend = RecordingBackend::json(200, json!({ "id": 1, "provider": "instagram" }));
        let (status, _) = call(
            app(&backend),
            request(
                Method::POST,
                "/api/v0/oauth/instagram/callback",
                Some(json!({ "code": "auth-code" })),
                true,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let call = backend.only_call();
        assert_eq!(call.path, "/api/v0/oauth/instagram/callback");
        assert_eq!(call.body, Some(json!({ "code": "auth-code", "state": "" })));
    }

    #[tokio::test]
    async fn test_missing_code_is_rejected() {
        let backend = RecordingBackend::default();
        let (status, _) = call(
            app(&backend),
            request(
                Method::POST,
                "/api/v0/oauth/instagram/callback",
                Some(json!({ "state": "s1" })),
                true,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_provider() {
        let backend = RecordingBackend::default();
        let (status, _) = call(
            app(&backend),
            request(Method::GET, "/api/v0/oauth/myspace/authorize-url", None, true),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn test_rejected_bodies_never_reach_backend() {
        let backend = RecordingBackend::default();
        let cases = [
            ("/api/v0/campaigns", Method::POST, json!({ "name": "" })),
            ("/api/v0/campaigns/1", Method::PATCH, json!({})),
            ("/api/v0/tags", Method::POST, json!({ "color": "#fff" })),
            ("/api/v0/subscriptions", Method::POST, json!({ "plan_id": 1, "billing_cycle": "weekly" })),
            ("/api/v0/reassignment-reasons", Method::POST, json!({ "code": "X" })),
            (
                "/api/v0/external-api-endpoints",
                Method::POST,
                json!({ "name": "x", "url": "ftp://x", "http_method": "GET" }),
            ),
            ("/api/v1/conversations/c1/messages", Method::POST, json!({ "content": "" })),
        ];

        for (uri, method, body) in cases {
            let (status, _) = call(app(&backend), request(method, uri, Some(body), true)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_forwards_all_fields() {
        let backend = RecordingBackend::json(201, json!({ "id": 3, "name": "Launch" }));
        let body = json!({ "name": "Launch", "budget": 5000, "start_date": "2026-05-01" });

        let (status, response) = call(
            app(&backend),
            request(Method::POST, "/api/v0/campaigns", Some(body.clone()), true),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response, json!({ "id": 3, "name": "Launch" }));
        assert_eq!(backend.only_call().body, Some(body));
    }

    #[tokio::test]
    async fn test_cancel_accepts_empty_body() {
        let backend = RecordingBackend::json(200, json!({ "id": 8, "status": "cancelled" }));
        let (status, body) = call(
            app(&backend),
            request(Method::POST, "/api/v0/subscriptions/8/cancel", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "cancelled");
    }
}

mod chat {
    use super::*;

    #[tokio::test]
    async fn test_messages_cursor_is_forwarded() {
        let backend = RecordingBackend::json(
            200,
            json!({ "items": [], "next_cursor": null, "has_more": false }),
        );
        let (status, body) = call(
            app(&backend),
            request(Method::GET, "/api/v1/conversations/c1/messages?cursor=m9&limit=20", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let call = backend.only_call();
        assert_eq!(call.query_value("cursor"), Some("m9"));
        assert_eq!(call.query_value("limit"), Some("20"));
    }

    #[tokio::test]
    async fn test_stream_is_relayed() {
        let backend = RecordingBackend::replying(FakeReply::Stream(vec![
            "data: {\"delta\":\"Hel\"}\n\n",
            "data: {\"delta\":\"lo\"}\n\n",
        ]));
        let response = app(&backend)
            .oneshot(request(
                Method::POST,
                "/api/v1/conversations/c1/messages/stream",
                Some(json!({ "content": "Hi" })),
                true,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            bytes.as_ref(),
            b"data: {\"delta\":\"Hel\"}\n\ndata: {\"delta\":\"lo\"}\n\n"
        );
    }
}

mod image_proxy {
    use super::*;

    #[tokio::test]
    async fn test_image_is_proxied_without_auth() {
        let backend = RecordingBackend::default().with_media("image/png", b"\x89PNG");
        let response = app(&backend)
            .oneshot(request(
                Method::GET,
                "/api/v0/image-proxy?url=https%3A%2F%2Fcdn.example.com%2Fa.png",
                None,
                false,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert_eq!(backend.only_call().path, "https://cdn.example.com/a.png");
    }

    #[tokio::test]
    async fn test_non_image_content_is_bad_gateway() {
        let backend = RecordingBackend::default().with_media("text/html", b"<script>alert(1)</script>");
        let (status, body) = call(
            app(&backend),
            request(
                Method::GET,
                "/api/v0/image-proxy?url=https%3A%2F%2Fcdn.example.com%2Fa.png",
                None,
                false,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({ "error": "Upstream resource is not an image" }));
    }

    #[tokio::test]
    async fn test_internal_hosts_are_refused() {
        let backend = RecordingBackend::default().with_media("image/png", b"\x89PNG");
        for target in [
            "http%3A%2F%2Flocalhost%3A8000%2Fapi%2Fv0%2Fusers",
            "http%3A%2F%2F127.0.0.1%2Fa.png",
            "http%3A%2F%2F10.1.2.3%2Fa.png",
            "http%3A%2F%2F169.254.169.254%2Flatest%2Fmeta-data%2F",
            "http%3A%2F%2F%5B%3A%3A1%5D%2Fa.png",
        ] {
            let uri = format!("/api/v0/image-proxy?url={target}");
            let (status, body) = call(app(&backend), request(Method::GET, &uri, None, false)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{target}");
            assert_eq!(body["error"], "URL host is not allowed");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bad_urls_are_rejected() {
        let backend = RecordingBackend::default();
        for uri in ["/api/v0/image-proxy", "/api/v0/image-proxy?url=file%3A%2F%2F%2Fetc%2Fpasswd"] {
            let (status, body) = call(app(&backend), request(Method::GET, uri, None, false)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].is_string());
        }
        assert_eq!(backend.call_count(), 0);
    }
}

mod relay {
    use super::*;

    #[tokio::test]
    async fn test_bare_list_is_relayed_unchanged() {
        let payload = json!({
            "data": [{ "id": 1, "name": null, "budget": 10 }],
            "pagination": { "page": 1, "page_size": 20, "total": 1 },
            "filters_applied": { "status": null }
        });
        let backend = RecordingBackend::json(200, payload.clone());

        let (status, body) =
            call(app(&backend), request(Method::GET, "/api/v0/campaigns", None, true)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_update_ack_without_id_is_relayed() {
        let backend = RecordingBackend::json(200, json!({ "message": "updated" }));
        let (status, body) = call(
            app(&backend),
            request(Method::PATCH, "/api/v0/campaigns/7", Some(json!({ "name": "Launch" })), true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "updated" }));
    }

    #[tokio::test]
    async fn test_data_envelope_wraps_payload_unchanged() {
        let payload = json!({
            "messages": [{ "id": "m1", "role": "user", "content": "Hi", "metadata": null }],
            "cursor": "m1",
            "conversation_title": "Launch plan"
        });
        let backend = RecordingBackend::json(200, payload.clone());

        let (status, body) = call(
            app(&backend),
            request(Method::GET, "/api/v1/conversations/c1/messages", None, true),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": payload }));
    }

    #[tokio::test]
    async fn test_missing_subscription_is_null_data() {
        let backend = RecordingBackend::json(200, Value::Null);
        let (status, body) = call(
            app(&backend),
            request(Method::GET, "/api/v0/subscriptions/current", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": null }));
    }
}

mod path_params {
    use super::*;

    #[tokio::test]
    async fn test_query_characters_stay_in_the_segment() {
        let backend = RecordingBackend::json(200, json!({ "id": 1 }));
        let (status, _) = call(
            app(&backend),
            request(Method::GET, "/api/v0/campaigns/1%3Fowner%3Dall", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let call = backend.only_call();
        assert_eq!(call.path, "/api/v0/campaigns/1%3Fowner=all");
        assert!(call.query.is_empty());
    }

    #[tokio::test]
    async fn test_encoded_slashes_cannot_walk_the_backend() {
        let backend = RecordingBackend::json(204, Value::Null);
        let (status, _) = call(
            app(&backend),
            request(Method::DELETE, "/api/v0/tags/..%2F..%2Fusers%2F5", None, true),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(backend.only_call().path, "/api/v0/tags/..%2F..%2Fusers%2F5");
    }

    #[tokio::test]
    async fn test_dot_segments_are_rejected() {
        let backend = RecordingBackend::default();
        for (method, uri) in [
            (Method::DELETE, "/api/v0/tags/%2E%2E"),
            (Method::GET, "/api/v0/campaigns/%2E"),
            (Method::GET, "/api/v1/conversations/%2E%2E/messages"),
            (Method::GET, "/api/v0/campaign-influencers/%2E%2E/price-negotiations"),
        ] {
            let (status, body) = call(app(&backend), request(method, uri, None, true)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body.to_string().contains("Invalid path parameter"), "{uri}");
        }
        assert_eq!(backend.call_count(), 0);
    }
}
