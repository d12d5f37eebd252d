//! Bearer token extraction
//!
//! The single place where credentials are read from inbound requests.
//! Every authenticated route goes through [`extract_bearer_token`].

use axum::http::{HeaderMap, header};

use crate::crypto::secrets_match;

/// Scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Header carrying the server-to-server secret for public-share requests
pub const INTERNAL_TOKEN_HEADER: &str = "x-internal-system-token";

/// Read `Authorization: Bearer <token>`.
///
/// Returns `None` when the header is absent, not valid UTF-8, does not use
/// the `Bearer` scheme, or carries an empty token. Surrounding whitespace is
/// ignored on both the header value and the token.
///
/// ## Examples
/// ```rust
/// use axum::http::{HeaderMap, HeaderValue, header};
/// use platform::bearer::extract_bearer_token;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
/// assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc.def"));
/// ```
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Who is calling the backend on behalf of this request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Token supplied by the dashboard user
    User(String),
    /// Configured system token, granted to trusted server-side callers
    System(String),
}

impl Credential {
    pub fn token(&self) -> &str {
        match self {
            Credential::User(token) | Credential::System(token) => token,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Credential::System(_))
    }
}

/// Grant the system token when the internal header matches it.
///
/// A missing, empty or wrong header value is treated exactly like an
/// absent header. Nothing is granted when no system token is configured.
pub fn internal_system_token(headers: &HeaderMap, configured: Option<&str>) -> Option<String> {
    let expected = configured.filter(|token| !token.is_empty())?;
    let presented = headers.get(INTERNAL_TOKEN_HEADER)?.to_str().ok()?.trim();

    if !presented.is_empty() && secrets_match(presented, expected) {
        Some(expected.to_string())
    } else {
        None
    }
}

/// Resolve the credential for routes that accept the internal bypass.
///
/// The internal header is checked first; otherwise the user bearer token is
/// required.
pub fn resolve_credential(headers: &HeaderMap, system_token: Option<&str>) -> Option<Credential> {
    if let Some(token) = internal_system_token(headers, system_token) {
        tracing::debug!("Internal system token accepted");
        return Some(Credential::System(token));
    }
    extract_bearer_token(headers).map(Credential::User)
}
