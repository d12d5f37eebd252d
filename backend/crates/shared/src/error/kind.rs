//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes, and the
//! two classifiers used when an upstream backend call fails.

use serde::Serialize;

/// Error classification
///
/// Every error that leaves a route handler carries one of these kinds.
/// Handlers switch on the kind, never on the human-readable message.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - missing or malformed input
    BadRequest,
    /// 401 - missing credentials or expired capability
    Unauthorized,
    /// 403 - authenticated but not permitted
    Forbidden,
    /// 404
    NotFound,
    /// 408
    RequestTimeout,
    /// 409
    Conflict,
    /// 410 - resource existed but has expired
    Gone,
    /// 422
    UnprocessableEntity,
    /// 429
    TooManyRequests,
    /// 500 - unclassified backend or internal error
    InternalServerError,
    /// 502 - an outbound fetch answered with something we will not relay
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// 504 - an outbound fetch did not answer in time
    GatewayTimeout,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::Gone.status_code(), 410);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::Gone => 410,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
            ErrorKind::GatewayTimeout => 504,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Gone => "Gone",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::GatewayTimeout => "Gateway Timeout",
        }
    }

    /// 5xx kinds. These should be logged at error level.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx kinds
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }

    /// Map an upstream HTTP status to a kind when the status alone is
    /// decisive.
    ///
    /// Returns `None` for statuses that carry no usable classification
    /// (5xx and anything unexpected); callers fall back to
    /// [`ErrorKind::classify_message`] for those.
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_upstream_status(404), Some(ErrorKind::NotFound));
    /// assert_eq!(ErrorKind::from_upstream_status(422), Some(ErrorKind::BadRequest));
    /// assert_eq!(ErrorKind::from_upstream_status(502), None);
    /// ```
    pub const fn from_upstream_status(status: u16) -> Option<ErrorKind> {
        match status {
            400 | 422 => Some(ErrorKind::BadRequest),
            401 => Some(ErrorKind::Unauthorized),
            403 => Some(ErrorKind::Forbidden),
            404 => Some(ErrorKind::NotFound),
            408 => Some(ErrorKind::RequestTimeout),
            409 => Some(ErrorKind::Conflict),
            410 => Some(ErrorKind::Gone),
            429 => Some(ErrorKind::TooManyRequests),
            _ => None,
        }
    }

    /// Classify an upstream error by its message.
    ///
    /// Keeps the HTTP mapping dashboard clients already depend on for
    /// backends that report every failure as a 500. Matching is
    /// case-insensitive; first rule wins.
    ///
    /// | message contains | kind |
    /// |---|---|
    /// | `not found` | `NotFound` |
    /// | `forbidden`, `permission`, `unauthorized`, `not permitted` | `Forbidden` |
    /// | `expired` | `Unauthorized` |
    /// | anything else | `InternalServerError` |
    pub fn classify_message(message: &str) -> ErrorKind {
        let lower = message.to_ascii_lowercase();

        if lower.contains("not found") {
            ErrorKind::NotFound
        } else if ["forbidden", "permission", "unauthorized", "not permitted"]
            .iter()
            .any(|needle| lower.contains(needle))
        {
            ErrorKind::Forbidden
        } else if lower.contains("expired") {
            ErrorKind::Unauthorized
        } else {
            ErrorKind::InternalServerError
        }
    }

    /// Status first, message second.
    pub fn from_upstream(status: u16, message: &str) -> ErrorKind {
        Self::from_upstream_status(status).unwrap_or_else(|| Self::classify_message(message))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
