//! Client Error Types

use thiserror::Error;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Constructed without token storage
    #[error("API client is only available in the browser")]
    NotInBrowser,

    /// No access token cached; no request was sent
    #[error("Not authenticated: no access token available")]
    MissingToken,

    /// Gateway answered with an error envelope
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection or protocol failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status when the gateway produced the error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Session should be re-established
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::MissingToken) || self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized() {
        assert!(ClientError::MissingToken.is_unauthorized());
        assert!(
            ClientError::Api {
                status: 401,
                message: "Unauthorized".into()
            }
            .is_unauthorized()
        );
        assert!(!ClientError::NotInBrowser.is_unauthorized());
    }
}
