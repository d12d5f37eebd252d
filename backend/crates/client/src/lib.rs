//! Typed client for the backend-for-frontend
//!
//! Talks to the gateway only, never to the FastAPI backend directly. The
//! dashboard keeps its access token in browser storage; [`TokenStorage`]
//! stands in for it here, and a client built without one fails every call
//! with [`ClientError::NotInBrowser`].

pub mod client;
pub mod error;
pub mod services;
pub mod storage;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use storage::{MemoryTokenStorage, TokenStorage};
