//! Foundation types for StreamGate.
//!
//! StreamGate is a data-access gateway over a ledger's append-only stream
//! primitive: named, shared logs into which participants publish keyed items.
//! This crate holds the types every other StreamGate crate depends on.
//!
//! # Key Types
//!
//! - [`StreamQueryDescriptor`] — Immutable, fully validated representation of
//!   one requested stream operation, ready for dispatch
//! - [`fields`] — The case-sensitive field-name contract shared by the HTTP
//!   surface and the descriptor builders
//! - [`EncodedKeyPair`] — Opaque asymmetric credential pair carried by node
//!   identity management

pub mod descriptor;
pub mod fields;
pub mod keypair;

pub use descriptor::{
    StreamQueryDescriptor, DEFAULT_ITEM_COUNT, DEFAULT_ITEM_START, DEFAULT_LOCAL_ORDERING,
    DEFAULT_VERBOSE,
};
pub use keypair::EncodedKeyPair;
