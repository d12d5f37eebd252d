//! Access-token storage

use std::sync::RwLock;

/// Where the dashboard's access token is cached
pub trait TokenStorage: Send + Sync {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: Option<String>);
}

/// Process-local storage
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        guard.as_deref().filter(|t| !t.trim().is_empty()).map(str::to_string)
    }

    fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }
}
