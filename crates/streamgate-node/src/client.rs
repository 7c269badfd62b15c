use async_trait::async_trait;
use serde_json::Value;

use crate::error::NodeResult;

/// RPC boundary to a ledger node.
///
/// One method per gateway operation. The gateway builds a fully validated
/// descriptor, invokes exactly one of these methods, and forwards the result
/// or failure without reshaping it. Implementations own the semantics of
/// `count`, `start`, and `local_ordering`; the gateway passes them through.
///
/// Any blocking (network I/O, node-side processing) happens inside the
/// implementation. The gateway neither times out nor cancels these calls.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Append an item to a stream. `payload` is canonical JSON text.
    async fn publish_item(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: &[String],
        payload: &str,
    ) -> NodeResult<Value>;

    /// Items matching a single key.
    #[allow(clippy::too_many_arguments)]
    async fn items_by_key(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        key: &str,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    ) -> NodeResult<Value>;

    /// Items matching all of the given keys.
    async fn items_by_keys(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: &[String],
        verbose: bool,
    ) -> NodeResult<Value>;

    /// Items authored by a single publisher.
    #[allow(clippy::too_many_arguments)]
    async fn items_by_publisher(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        publisher: &str,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    ) -> NodeResult<Value>;

    /// Items authored by all of the given publishers.
    async fn items_by_publishers(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        publishers: &[String],
        verbose: bool,
    ) -> NodeResult<Value>;

    /// All items in a stream.
    #[allow(clippy::too_many_arguments)]
    async fn stream_items(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    ) -> NodeResult<Value>;

    /// Publishers who have written to a stream. `publishers` of `None`
    /// means no filter.
    #[allow(clippy::too_many_arguments)]
    async fn stream_publishers(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        publishers: Option<&[String]>,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    ) -> NodeResult<Value>;

    /// Keys present in a stream. `keys` of `None` means no filter.
    #[allow(clippy::too_many_arguments)]
    async fn stream_keys(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: Option<&[String]>,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    ) -> NodeResult<Value>;

    /// Connect this node to the administering node of a network; returns
    /// this node's wallet address.
    async fn connect_to_admin_node(&self, admin_node_address: &str) -> NodeResult<String>;

    /// Add a node to a blockchain network; returns the new node's wallet
    /// address.
    async fn add_node(&self, blockchain_name: &str, new_node_address: &str) -> NodeResult<String>;
}
