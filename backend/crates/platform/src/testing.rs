//! Recording fake transport for router tests
//!
//! Answers every call with a configured reply and keeps the requests it
//! saw, so tests can assert both what was forwarded and that rejected
//! requests never left the gateway.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use kernel::error::app_error::{AppError, AppResult};
use reqwest::Url;
use serde_json::Value;

use crate::media::{FetchedMedia, MediaFetcher, MediaLimits};
use crate::upstream::{Backend, BackendRequest, BackendResponse, BackendStream, upstream_error};

/// What the fake answers with
#[derive(Debug, Clone)]
pub enum FakeReply {
    Json(u16, Value),
    Error(u16, Value),
    /// Chunks of a streamed body
    Stream(Vec<&'static str>),
}

#[derive(Clone)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<BackendRequest>>>,
    reply: Arc<Mutex<FakeReply>>,
    media: Arc<Mutex<Option<FetchedMedia>>>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::replying(FakeReply::Json(200, Value::Object(Default::default())))
    }
}

impl RecordingBackend {
    pub fn replying(reply: FakeReply) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(reply)),
            media: Arc::new(Mutex::new(None)),
        }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self::replying(FakeReply::Json(status, body))
    }

    pub fn error(status: u16, body: Value) -> Self {
        Self::replying(FakeReply::Error(status, body))
    }

    pub fn with_media(self, content_type: &str, body: &'static [u8]) -> Self {
        *self.media.lock().unwrap() = Some(FetchedMedia {
            content_type: Some(content_type.to_string()),
            body: Bytes::from_static(body),
        });
        self
    }

    /// Every request received so far
    pub fn calls(&self) -> Vec<BackendRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The single request received; panics otherwise
    pub fn only_call(&self) -> BackendRequest {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one backend call");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, request: BackendRequest) -> FakeReply {
        self.calls.lock().unwrap().push(request);
        self.reply.lock().unwrap().clone()
    }
}

impl Backend for RecordingBackend {
    async fn send(&self, request: BackendRequest) -> AppResult<BackendResponse> {
        match self.record(request) {
            FakeReply::Json(status, body) => {
                Ok(BackendResponse::new(status, serde_json::to_vec(&body)?))
            }
            FakeReply::Error(status, body) => {
                Err(upstream_error(status, &serde_json::to_vec(&body)?))
            }
            FakeReply::Stream(chunks) => Ok(BackendResponse::new(200, chunks.concat())),
        }
    }

    async fn stream(&self, request: BackendRequest) -> AppResult<BackendStream> {
        match self.record(request) {
            FakeReply::Stream(chunks) => {
                let items = chunks
                    .into_iter()
                    .map(|chunk| Ok::<_, AppError>(Bytes::from_static(chunk.as_bytes())));
                Ok(BackendStream {
                    status: 200,
                    content_type: Some("text/event-stream".to_string()),
                    body: Box::pin(futures::stream::iter(items)),
                })
            }
            FakeReply::Json(status, body) => {
                let bytes = Bytes::from(serde_json::to_vec(&body)?);
                Ok(BackendStream {
                    status,
                    content_type: Some("application/json".to_string()),
                    body: Box::pin(futures::stream::iter([Ok::<_, AppError>(bytes)])),
                })
            }
            FakeReply::Error(status, body) => {
                Err(upstream_error(status, &serde_json::to_vec(&body)?))
            }
        }
    }
}

impl MediaFetcher for RecordingBackend {
    /// Applies the same content-type and size checks as the real fetcher
    async fn fetch(&self, url: Url, limits: MediaLimits) -> AppResult<FetchedMedia> {
        self.calls
            .lock()
            .unwrap()
            .push(BackendRequest::get(url.to_string()));
        let media = self
            .media
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::not_found("Failed to fetch image: upstream returned 404"))?;

        let content_type = limits.accept_content_type(media.content_type.as_deref())?;
        limits.accept_len(media.body.len() as u64)?;
        Ok(FetchedMedia {
            content_type: Some(content_type),
            body: media.body,
        })
    }
}
