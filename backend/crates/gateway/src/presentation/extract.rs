//! Request parsing helpers

use std::collections::HashMap;

use axum::http::HeaderMap;
use bytes::Bytes;
use platform::bearer::extract_bearer_token;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, GatewayResult};

/// Raw query string pairs
pub type QueryParams = HashMap<String, String>;

/// Bearer token or 401
pub fn require_bearer(headers: &HeaderMap) -> GatewayResult<String> {
    extract_bearer_token(headers).ok_or(GatewayError::MissingToken)
}

/// Query value by name
pub fn param<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str)
}

/// Decode a JSON body; malformed or missing JSON is a 400
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> GatewayResult<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a JSON body that may be omitted entirely
pub fn parse_optional_body<T: DeserializeOwned + Default>(body: &Bytes) -> GatewayResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    parse_body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use kernel::error::kind::ErrorKind;
    use serde_json::Value;

    #[test]
    fn test_require_bearer() {
        let mut headers = HeaderMap::new();
        assert!(matches!(require_bearer(&headers), Err(GatewayError::MissingToken)));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(require_bearer(&headers).unwrap(), "abc");
    }

    #[test]
    fn test_parse_body() {
        let value: Value = parse_body(&Bytes::from_static(br#"{"a":1}"#)).unwrap();
        assert_eq!(value["a"], 1);

        let err = parse_body::<Value>(&Bytes::from_static(b"{oops")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        let err = parse_body::<Value>(&Bytes::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_parse_optional_body() {
        #[derive(Debug, Default, serde::Deserialize, PartialEq)]
        struct Optional {
            #[serde(default)]
            reason: Option<String>,
        }

        assert_eq!(
            parse_optional_body::<Optional>(&Bytes::from_static(b"  ")).unwrap(),
            Optional::default()
        );
        assert_eq!(
            parse_optional_body::<Optional>(&Bytes::from_static(br#"{"reason":"budget"}"#))
                .unwrap()
                .reason
                .as_deref(),
            Some("budget")
        );
    }
}
