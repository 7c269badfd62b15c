//! Request normalization and query dispatch for StreamGate.
//!
//! This crate is the only place where correctness guarantees about *what
//! gets asked of the ledger node* are enforced. Loosely typed caller input
//! comes in as [`RawParams`] (query) or JSON bodies; per-operation builders
//! in [`build`] validate it, apply documented defaults, and produce an
//! immutable [`StreamQueryDescriptor`](streamgate_types::StreamQueryDescriptor);
//! [`dispatch`] maps each descriptor to exactly one
//! [`NodeClient`](streamgate_node::NodeClient) call.
//!
//! Descriptors are request-local: constructed fresh, dispatched once,
//! discarded. Nothing here is cached, retried, or shared across requests.

pub mod build;
pub mod coerce;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod params;
pub mod schema;

pub use coerce::{coerce_boolean, coerce_integer};
pub use dispatch::dispatch;
pub use error::{GatewayError, GatewayResult, ParamSource};
pub use identity::{AddNode, ConnectToAdminNode};
pub use params::RawParams;
pub use schema::RequestSchema;
