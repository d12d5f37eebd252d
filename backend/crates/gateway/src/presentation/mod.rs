//! Presentation Layer
//!
//! Route handlers and the router. Every handler runs the same fixed
//! sequence: parse, authenticate, validate, invoke one service, respond.

pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;

pub use handlers::{GatewayBackend, GatewayState};
pub use router::gateway_router;
