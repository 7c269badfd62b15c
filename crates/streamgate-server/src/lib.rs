//! HTTP surface for StreamGate.
//!
//! Exposes the nine gateway operations over a statically enumerated route
//! table, translating every failure into the single error envelope the
//! contract promises. All validation lives in `streamgate-gateway`; all
//! ledger behavior lives behind the `streamgate-node` client trait.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::AppState;
pub use router::build_router;
pub use server::StreamGateServer;
