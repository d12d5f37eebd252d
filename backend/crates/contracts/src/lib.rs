//! Typed request/response contracts
//!
//! Transfer shapes exchanged with the FastAPI backend and with dashboard
//! clients. Nothing here is persisted by the gateway; every value lives for
//! one request.
//!
//! Request DTOs validate and forward; every one keeps fields it does not
//! model in a flattened `extra` map, so forwarding a body never drops what
//! the client sent. Response DTOs are the typed view used by `bff-client`
//! and decode leniently. The gateway itself never decodes a response: it
//! relays the backend's JSON as received.

pub mod campaign;
pub mod comment;
pub mod conversation;
pub mod external_api_endpoint;
pub mod id;
pub mod oauth;
pub mod price_negotiation;
pub mod public_session;
pub mod reassignment_reason;
pub mod shared_report;
pub mod subscription;
pub mod tag;
mod validate;

pub use id::Id;
pub use kernel::pagination::{PageRequest, Paginated, Pagination};
pub use validate::{require_positive, require_text};

/// Fields carried through without being modelled
pub type Extra = serde_json::Map<String, serde_json::Value>;
