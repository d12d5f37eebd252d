//! Remote media fetching
//!
//! Used by the image proxy only: the one outbound call in the gateway that
//! goes to an arbitrary host instead of the backend, and the only one with a
//! timeout. The proxy is unauthenticated, so three rules hold for every
//! fetch:
//! - internal hosts (loopback, private, link-local) are never contacted,
//!   neither directly nor through a redirect
//! - only raster `image/*` responses are relayed
//! - bodies are capped at [`MediaLimits::max_bytes`]

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use reqwest::Url;
use reqwest::redirect::Policy;

use crate::upstream::HttpBackend;

/// Timeout applied to image proxy fetches
pub const MEDIA_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest image the proxy will relay
pub const MEDIA_MAX_BYTES: usize = 10 * 1024 * 1024;

const MAX_REDIRECTS: usize = 5;

/// Fetched remote resource
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedMedia {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Bounds for one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaLimits {
    pub timeout: Duration,
    pub max_bytes: usize,
}

impl Default for MediaLimits {
    fn default() -> Self {
        Self {
            timeout: MEDIA_FETCH_TIMEOUT,
            max_bytes: MEDIA_MAX_BYTES,
        }
    }
}

impl MediaLimits {
    /// The upstream content type, if it names an image
    pub fn accept_content_type(&self, content_type: Option<&str>) -> AppResult<String> {
        let content_type = content_type.map(str::trim).unwrap_or_default();
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        // SVG can carry script and would run on the dashboard's origin
        let is_image = essence.starts_with("image/") && essence.len() > "image/".len();
        if is_image && essence != "image/svg+xml" {
            Ok(content_type.to_string())
        } else {
            tracing::warn!(content_type = %content_type, "Refusing to relay non-image media");
            Err(AppError::bad_gateway("Upstream resource is not an image"))
        }
    }

    pub fn accept_len(&self, len: u64) -> AppResult<()> {
        if len > self.max_bytes as u64 {
            tracing::warn!(len, max = self.max_bytes, "Refusing to relay oversized media");
            return Err(AppError::bad_gateway(format!(
                "Image exceeds {} bytes",
                self.max_bytes
            )));
        }
        Ok(())
    }
}

/// Media fetcher
#[trait_variant::make(MediaFetcher: Send)]
pub trait LocalMediaFetcher {
    /// Fetch `url` within `limits`.
    ///
    /// Non-image responses and oversized bodies fail with
    /// [`ErrorKind::BadGateway`].
    async fn fetch(&self, url: Url, limits: MediaLimits) -> AppResult<FetchedMedia>;
}

/// Parse and check a user-supplied media URL.
///
/// Only absolute `http`/`https` URLs naming a public host are accepted.
pub fn parse_media_url(raw: &str) -> AppResult<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::bad_request("url parameter is required"));
    }

    let url = Url::parse(raw).map_err(|_| AppError::bad_request("Invalid url parameter"))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => {}
        _ => return Err(AppError::bad_request("Only http and https URLs can be proxied")),
    }

    if targets_internal_host(&url) {
        tracing::warn!(host = ?url.host_str(), "Refusing to proxy an internal host");
        return Err(AppError::bad_request("URL host is not allowed"));
    }
    Ok(url)
}

/// Whether the URL's host is a name or literal address that stays inside
/// the deployment
pub fn targets_internal_host(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return true;
    };
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    if host == "localhost" || host.ends_with(".localhost") {
        return true;
    }

    // IPv6 literals keep their brackets in `host_str`
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_ok_and(is_internal_ip)
}

pub fn is_internal_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => is_internal_ipv4(ip),
        IpAddr::V6(ip) => is_internal_ipv6(ip),
    }
}

fn is_internal_ipv4(ip: Ipv4Addr) -> bool {
    let [a, b, ..] = ip.octets();
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        // carrier-grade NAT, 100.64.0.0/10
        || (a == 100 && (b & 0xc0) == 64)
}

fn is_internal_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_internal_ipv4(mapped);
    }
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        // unique local fc00::/7
        || (first & 0xfe00) == 0xfc00
        // link-local fe80::/10
        || (first & 0xffc0) == 0xfe80
}

/// Client used for media fetches: every redirect hop is checked against
/// the same host rules as the original URL
pub(crate) fn media_client() -> AppResult<reqwest::Client> {
    let policy = Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if targets_internal_host(attempt.url()) {
            attempt.error("redirect to an internal host")
        } else {
            attempt.follow()
        }
    });

    reqwest::Client::builder()
        .redirect(policy)
        .build()
        .map_app_err(ErrorKind::InternalServerError, "Failed to create media client")
}

/// Refuse hostnames that resolve to internal addresses
async fn ensure_public_resolution(url: &Url) -> AppResult<()> {
    let Some(host) = url.host_str() else {
        return Err(AppError::bad_request("URL host is not allowed"));
    };
    let port = url.port_or_known_default().unwrap_or(80);

    let addrs = tokio::net::lookup_host((host.trim_start_matches('[').trim_end_matches(']'), port))
        .await
        .map_err(|e| {
            tracing::warn!(host = %host, error = %e, "Could not resolve media host");
            AppError::bad_gateway("Failed to fetch image: host could not be resolved").with_source(e)
        })?;

    for addr in addrs {
        if is_internal_ip(addr.ip()) {
            tracing::warn!(host = %host, ip = %addr.ip(), "Media host resolves to an internal address");
            return Err(AppError::bad_request("URL host is not allowed"));
        }
    }
    Ok(())
}

impl MediaFetcher for HttpBackend {
    async fn fetch(&self, url: Url, limits: MediaLimits) -> AppResult<FetchedMedia> {
        tracing::debug!(host = ?url.host_str(), "Fetching remote media");

        ensure_public_resolution(&url).await?;

        let response = self
            .media_client()
            .get(url.clone())
            .timeout(limits.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!(url = %url, "Remote media fetch timed out");
                    AppError::gateway_timeout("Image request timed out").with_source(e)
                } else {
                    tracing::warn!(url = %url, error = %e, "Remote media fetch failed");
                    AppError::bad_gateway(format!("Failed to fetch image: {e}")).with_source(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::from_upstream(
                status.as_u16(),
                format!("Failed to fetch image: upstream returned {}", status.as_u16()),
            ));
        }

        let content_type = limits.accept_content_type(
            response
                .headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        )?;
        if let Some(len) = response.content_length() {
            limits.accept_len(len)?;
        }

        // Content-Length can be absent or wrong; count what actually arrives
        let mut body = BytesMut::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            limits.accept_len((body.len() + chunk.len()) as u64)?;
            body.extend_from_slice(&chunk);
        }

        Ok(FetchedMedia {
            content_type: Some(content_type),
            body: body.freeze(),
        })
    }
}
