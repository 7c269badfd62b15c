use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rand::RngCore;
use serde_json::{json, Value};

use crate::client::NodeClient;
use crate::error::{NodeError, NodeResult};

/// In-memory ledger node for tests, local demos, and embedding.
///
/// Streams are per-chain item vectors in publish order. Because a single
/// in-process node observes every item the moment it is finalized, chain
/// order and local-arrival order coincide and `local_ordering` selects the
/// same sequence either way.
pub struct MemoryNode {
    wallet: String,
    inner: RwLock<NodeState>,
}

#[derive(Default)]
struct NodeState {
    chains: HashMap<String, ChainState>,
    admin_node: Option<String>,
}

#[derive(Default)]
struct ChainState {
    streams: HashMap<String, Vec<StoredItem>>,
    nodes: Vec<String>,
}

struct StoredItem {
    txid: String,
    keys: Vec<String>,
    publisher: String,
    payload: String,
}

impl StoredItem {
    fn render(&self, verbose: bool) -> Value {
        let data: Value = serde_json::from_str(&self.payload).unwrap_or(Value::Null);
        let mut item = json!({
            "publishers": [self.publisher],
            "keys": self.keys,
            "data": data,
        });
        if verbose {
            item["txid"] = Value::String(self.txid.clone());
            item["confirmations"] = json!(1);
        }
        item
    }
}

/// Hex address in the node's wallet namespace.
fn mint_address() -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("1{}", hex::encode(bytes))
}

fn mint_txid() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Select the `[begin, end)` window described by `count`/`start` over a list
/// of `len` items. Negative `start` anchors the window at the end of the
/// list, so the defaults (`start = -1`, count = all) select everything.
fn window(len: usize, count: i64, start: i64) -> (usize, usize) {
    let len = len as i64;
    let count = count.clamp(0, len);
    if start < 0 {
        let end = (len + start + 1).clamp(0, len);
        (((end - count).max(0)) as usize, end as usize)
    } else {
        let begin = start.min(len);
        (begin as usize, (begin + count).min(len) as usize)
    }
}

impl MemoryNode {
    pub fn new() -> Self {
        Self {
            wallet: mint_address(),
            inner: RwLock::new(NodeState::default()),
        }
    }

    /// This node's own wallet address.
    pub fn wallet_address(&self) -> &str {
        &self.wallet
    }

    /// Insert an item with an explicit publisher, bypassing the publish
    /// path. Test seam for publisher-scoped queries.
    pub fn seed_item(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: &[&str],
        publisher: &str,
        payload: Value,
    ) {
        let mut state = self.inner.write().expect("node state lock poisoned");
        let chain = state.chains.entry(blockchain_name.to_string()).or_default();
        chain
            .streams
            .entry(stream_name.to_string())
            .or_default()
            .push(StoredItem {
                txid: mint_txid(),
                keys: keys.iter().map(|k| k.to_string()).collect(),
                publisher: publisher.to_string(),
                payload: payload.to_string(),
            });
    }

    fn read_stream<T>(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        f: impl FnOnce(&[StoredItem]) -> T,
    ) -> NodeResult<T> {
        let state = self
            .inner
            .read()
            .map_err(|_| NodeError::Unavailable("node state lock poisoned".into()))?;
        let chain = state
            .chains
            .get(blockchain_name)
            .ok_or_else(|| NodeError::Unavailable(format!("unknown chain {blockchain_name}")))?;
        let items = chain.streams.get(stream_name).ok_or_else(|| {
            NodeError::domain(-708, format!("Stream with this name not found: {stream_name}"))
        })?;
        Ok(f(items))
    }
}

impl Default for MemoryNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodeClient for MemoryNode {
    async fn publish_item(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: &[String],
        payload: &str,
    ) -> NodeResult<Value> {
        let txid = mint_txid();
        let mut state = self
            .inner
            .write()
            .map_err(|_| NodeError::Unavailable("node state lock poisoned".into()))?;
        let chain = state.chains.entry(blockchain_name.to_string()).or_default();
        chain
            .streams
            .entry(stream_name.to_string())
            .or_default()
            .push(StoredItem {
                txid: txid.clone(),
                keys: keys.to_vec(),
                publisher: self.wallet.clone(),
                payload: payload.to_string(),
            });
        tracing::debug!(%blockchain_name, %stream_name, %txid, "published item");
        Ok(Value::String(txid))
    }

    async fn items_by_key(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        key: &str,
        verbose: bool,
        count: i64,
        start: i64,
        _local_ordering: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            let matched: Vec<&StoredItem> = items
                .iter()
                .filter(|i| i.keys.iter().any(|k| k == key))
                .collect();
            let (begin, end) = window(matched.len(), count, start);
            Value::Array(matched[begin..end].iter().map(|i| i.render(verbose)).collect())
        })
    }

    async fn items_by_keys(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: &[String],
        verbose: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            Value::Array(
                items
                    .iter()
                    .filter(|i| keys.iter().all(|k| i.keys.contains(k)))
                    .map(|i| i.render(verbose))
                    .collect(),
            )
        })
    }

    async fn items_by_publisher(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        publisher: &str,
        verbose: bool,
        count: i64,
        start: i64,
        _local_ordering: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            let matched: Vec<&StoredItem> =
                items.iter().filter(|i| i.publisher == publisher).collect();
            let (begin, end) = window(matched.len(), count, start);
            Value::Array(matched[begin..end].iter().map(|i| i.render(verbose)).collect())
        })
    }

    async fn items_by_publishers(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        publishers: &[String],
        verbose: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            Value::Array(
                items
                    .iter()
                    .filter(|i| publishers.iter().any(|p| *p == i.publisher))
                    .map(|i| i.render(verbose))
                    .collect(),
            )
        })
    }

    async fn stream_items(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        verbose: bool,
        count: i64,
        start: i64,
        _local_ordering: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            let (begin, end) = window(items.len(), count, start);
            Value::Array(items[begin..end].iter().map(|i| i.render(verbose)).collect())
        })
    }

    async fn stream_publishers(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        publishers: Option<&[String]>,
        verbose: bool,
        count: i64,
        start: i64,
        _local_ordering: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            let mut order: Vec<&str> = Vec::new();
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for item in items {
                if let Some(filter) = publishers {
                    if !filter.iter().any(|p| *p == item.publisher) {
                        continue;
                    }
                }
                if !counts.contains_key(item.publisher.as_str()) {
                    order.push(&item.publisher);
                }
                *counts.entry(&item.publisher).or_insert(0) += 1;
            }
            let (begin, end) = window(order.len(), count, start);
            Value::Array(
                order[begin..end]
                    .iter()
                    .map(|p| {
                        let mut entry = json!({ "publisher": p, "items": counts[p] });
                        if verbose {
                            entry["confirmed"] = json!(counts[p]);
                        }
                        entry
                    })
                    .collect(),
            )
        })
    }

    async fn stream_keys(
        &self,
        blockchain_name: &str,
        stream_name: &str,
        keys: Option<&[String]>,
        verbose: bool,
        count: i64,
        start: i64,
        _local_ordering: bool,
    ) -> NodeResult<Value> {
        self.read_stream(blockchain_name, stream_name, |items| {
            let mut order: Vec<&str> = Vec::new();
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for item in items {
                for key in &item.keys {
                    if let Some(filter) = keys {
                        if !filter.contains(key) {
                            continue;
                        }
                    }
                    if !counts.contains_key(key.as_str()) {
                        order.push(key);
                    }
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
            let (begin, end) = window(order.len(), count, start);
            Value::Array(
                order[begin..end]
                    .iter()
                    .map(|k| {
                        let mut entry = json!({ "key": k, "items": counts[k] });
                        if verbose {
                            entry["confirmed"] = json!(counts[k]);
                        }
                        entry
                    })
                    .collect(),
            )
        })
    }

    async fn connect_to_admin_node(&self, admin_node_address: &str) -> NodeResult<String> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| NodeError::Unavailable("node state lock poisoned".into()))?;
        state.admin_node = Some(admin_node_address.to_string());
        tracing::info!(%admin_node_address, "connected to admin node");
        Ok(self.wallet.clone())
    }

    async fn add_node(&self, blockchain_name: &str, new_node_address: &str) -> NodeResult<String> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| NodeError::Unavailable("node state lock poisoned".into()))?;
        let chain = state.chains.entry(blockchain_name.to_string()).or_default();
        chain.nodes.push(new_node_address.to_string());
        tracing::info!(%blockchain_name, %new_node_address, "added node to network");
        Ok(mint_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamgate_types::{DEFAULT_ITEM_COUNT, DEFAULT_ITEM_START};

    #[tokio::test]
    async fn publish_then_query_by_key() {
        let node = MemoryNode::new();
        node.publish_item("demo", "s1", &["k1".into()], "\"v1\"")
            .await
            .unwrap();
        node.publish_item("demo", "s1", &["k2".into()], "\"v2\"")
            .await
            .unwrap();

        let items = node
            .items_by_key("demo", "s1", "k1", false, DEFAULT_ITEM_COUNT, DEFAULT_ITEM_START, false)
            .await
            .unwrap();
        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["data"], "v1");
        assert!(items[0].get("txid").is_none());
    }

    #[tokio::test]
    async fn verbose_adds_transaction_detail() {
        let node = MemoryNode::new();
        node.publish_item("demo", "s1", &["k1".into()], "1").await.unwrap();
        let items = node
            .items_by_key("demo", "s1", "k1", true, DEFAULT_ITEM_COUNT, DEFAULT_ITEM_START, false)
            .await
            .unwrap();
        assert!(items[0]["txid"].is_string());
        assert_eq!(items[0]["confirmations"], 1);
    }

    #[tokio::test]
    async fn items_by_keys_requires_all_keys() {
        let node = MemoryNode::new();
        node.publish_item("demo", "s1", &["a".into(), "b".into()], "1")
            .await
            .unwrap();
        node.publish_item("demo", "s1", &["a".into()], "2").await.unwrap();

        let both = node
            .items_by_keys("demo", "s1", &["a".into(), "b".into()], false)
            .await
            .unwrap();
        assert_eq!(both.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn publisher_queries_use_seeded_addresses() {
        let node = MemoryNode::new();
        node.seed_item("demo", "s1", &["k"], "addr-a", json!(1));
        node.seed_item("demo", "s1", &["k"], "addr-b", json!(2));

        let a = node
            .items_by_publisher("demo", "s1", "addr-a", false, DEFAULT_ITEM_COUNT, -1, false)
            .await
            .unwrap();
        assert_eq!(a.as_array().unwrap().len(), 1);

        let either = node
            .items_by_publishers("demo", "s1", &["addr-a".into(), "addr-b".into()], false)
            .await
            .unwrap();
        assert_eq!(either.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn stream_keys_filter_and_counts() {
        let node = MemoryNode::new();
        node.seed_item("demo", "s1", &["k1"], "p", json!(1));
        node.seed_item("demo", "s1", &["k1", "k2"], "p", json!(2));

        let all = node
            .stream_keys("demo", "s1", None, false, DEFAULT_ITEM_COUNT, -1, false)
            .await
            .unwrap();
        assert_eq!(all.as_array().unwrap().len(), 2);
        assert_eq!(all[0]["key"], "k1");
        assert_eq!(all[0]["items"], 2);

        let filtered = node
            .stream_keys(
                "demo",
                "s1",
                Some(&["k2".to_string()]),
                false,
                DEFAULT_ITEM_COUNT,
                -1,
                false,
            )
            .await
            .unwrap();
        assert_eq!(filtered.as_array().unwrap().len(), 1);
        assert_eq!(filtered[0]["key"], "k2");
    }

    #[tokio::test]
    async fn unknown_stream_is_a_domain_error() {
        let node = MemoryNode::new();
        node.publish_item("demo", "s1", &["k".into()], "1").await.unwrap();
        let err = node
            .stream_items("demo", "missing", false, DEFAULT_ITEM_COUNT, -1, false)
            .await
            .unwrap_err();
        let NodeError::Domain { info } = err else {
            panic!("expected domain error");
        };
        assert_eq!(info["error"]["code"], -708);
    }

    #[tokio::test]
    async fn identity_operations_mint_wallet_addresses() {
        let node = MemoryNode::new();
        let own = node.connect_to_admin_node("10.0.0.1:7447").await.unwrap();
        assert_eq!(own, node.wallet_address());

        let minted = node.add_node("demo", "10.0.0.2:7447").await.unwrap();
        assert_ne!(minted, own);
        assert_eq!(minted.len(), 41);
    }

    #[test]
    fn window_selects_from_the_end_for_negative_start() {
        assert_eq!(window(10, i64::MAX, -1), (0, 10));
        assert_eq!(window(10, 3, -1), (7, 10));
        assert_eq!(window(10, 3, -5), (3, 6));
        assert_eq!(window(10, 3, 2), (2, 5));
        assert_eq!(window(10, i64::MAX, 4), (4, 10));
        assert_eq!(window(0, 5, -1), (0, 0));
    }
}
