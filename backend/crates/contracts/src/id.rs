//! Backend identifiers

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Backend identifier, integer or string
///
/// Backend tables mix integer and UUID keys. The value is re-serialized in
/// the form it arrived in, so forwarding never changes its JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum Id {
    #[display("{_0}")]
    Number(i64),
    #[display("{_0}")]
    Text(String),
}

impl Id {
    /// Empty or whitespace-only string ids
    pub fn is_blank(&self) -> bool {
        match self {
            Id::Number(_) => false,
            Id::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_json_type() {
        let number: Id = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(number, Id::Number(42));
        assert_eq!(serde_json::to_value(&number).unwrap(), json!(42));

        let text: Id = serde_json::from_value(json!("c0ffee")).unwrap();
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("c0ffee"));
    }

    #[test]
    fn test_display_and_blank() {
        assert_eq!(Id::from(7).to_string(), "7");
        assert_eq!(Id::from("abc").to_string(), "abc");
        assert!(Id::from(" ").is_blank());
        assert!(!Id::from(0).is_blank());
    }
}
