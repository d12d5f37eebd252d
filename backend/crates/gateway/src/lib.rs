//! Gateway - authenticated routes of the backend-for-frontend
//!
//! Clean Architecture structure:
//! - `application/` - Server services, one backend call per operation
//! - `presentation/` - HTTP handlers, router
//!
//! Every route authenticates with a bearer token (the image proxy is the
//! one public exception), validates its input, forwards exactly one
//! request to the FastAPI backend and answers in the envelope its
//! dashboard consumers already parse.

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use presentation::{GatewayBackend, GatewayState, gateway_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
