//! Ledger node client boundary for StreamGate.
//!
//! The gateway treats the ledger node as a black box behind the
//! [`NodeClient`] trait: one call per dispatched descriptor, results and
//! failures forwarded as-is. [`MemoryNode`] implements the trait over an
//! in-memory stream store for tests, local demos, and embedding.

pub mod client;
pub mod error;
pub mod memory;

pub use client::NodeClient;
pub use error::{NodeError, NodeResult};
pub use memory::MemoryNode;
