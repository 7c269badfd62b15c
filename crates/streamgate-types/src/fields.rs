//! The field-name contract for gateway requests.
//!
//! Names are case-sensitive and shared verbatim between request bodies,
//! query parameters, and error messages. List-valued query parameters use
//! the bracketed form (`keys[]`, `publishers[]`), distinct from the singular
//! field name used in JSON bodies.

pub const BLOCKCHAIN_NAME: &str = "blockchainName";
pub const STREAM_NAME: &str = "streamName";
pub const DATA: &str = "data";
pub const KEY: &str = "key";
pub const KEYS: &str = "keys";
pub const KEYS_PARAM: &str = "keys[]";
pub const PUBLISHER: &str = "publisher";
pub const PUBLISHERS: &str = "publishers";
pub const PUBLISHERS_PARAM: &str = "publishers[]";
pub const VERBOSE: &str = "verbose";
pub const COUNT: &str = "count";
pub const START: &str = "start";
pub const LOCAL_ORDERING: &str = "localOrdering";
pub const ADMIN_NODE_ADDRESS: &str = "adminNodeAddress";
pub const NEW_NODE_ADDRESS: &str = "newNodeAddress";
