use serde::{Deserialize, Serialize};

/// Default for `verbose` when the caller omits it.
pub const DEFAULT_VERBOSE: bool = false;

/// "All items" sentinel for `count`. The legal value space of `count` is
/// owned by the ledger node contract; the gateway only passes it through.
pub const DEFAULT_ITEM_COUNT: i64 = i64::MAX;

/// Default for `start`. Negative values mean "most recent items first".
pub const DEFAULT_ITEM_START: i64 = -1;

/// Default for `localOrdering`: chain order, not node-arrival order.
pub const DEFAULT_LOCAL_ORDERING: bool = false;

/// An immutable, fully validated stream operation, ready for dispatch.
///
/// One variant per supported operation. Descriptors are built fresh per
/// request by the gateway builders, dispatched exactly once, and discarded;
/// they are never mutated after construction.
///
/// Field invariants (enforced by the builders, relied on downstream):
/// `blockchain_name` and `stream_name` are trimmed and non-empty; every
/// list field carries at least one element; the optional filter lists of
/// [`StreamPublishers`](Self::StreamPublishers) and
/// [`StreamKeys`](Self::StreamKeys) are `None` for "no filter", never
/// `Some(vec![])`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamQueryDescriptor {
    /// Append one item to a stream. `payload` is the canonical JSON text of
    /// the caller's data, encoded once at build time so retries and the wire
    /// representation agree.
    PublishItem {
        blockchain_name: String,
        stream_name: String,
        keys: Vec<String>,
        payload: String,
    },
    /// Items matching a single key.
    ByKey {
        blockchain_name: String,
        stream_name: String,
        key: String,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    },
    /// Items matching all of the given keys.
    ByKeys {
        blockchain_name: String,
        stream_name: String,
        keys: Vec<String>,
        verbose: bool,
    },
    /// Items authored by a single publisher wallet address.
    ByPublisher {
        blockchain_name: String,
        stream_name: String,
        publisher: String,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    },
    /// Items authored by all of the given publishers.
    ByPublishers {
        blockchain_name: String,
        stream_name: String,
        publishers: Vec<String>,
        verbose: bool,
    },
    /// All items in a stream.
    StreamItems {
        blockchain_name: String,
        stream_name: String,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    },
    /// Publishers who have written to a stream, optionally restricted to a
    /// caller-supplied set.
    StreamPublishers {
        blockchain_name: String,
        stream_name: String,
        publishers: Option<Vec<String>>,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    },
    /// Keys present in a stream, optionally restricted to a caller-supplied
    /// set.
    StreamKeys {
        blockchain_name: String,
        stream_name: String,
        keys: Option<Vec<String>>,
        verbose: bool,
        count: i64,
        start: i64,
        local_ordering: bool,
    },
}

impl StreamQueryDescriptor {
    /// The blockchain this operation targets.
    pub fn blockchain_name(&self) -> &str {
        match self {
            Self::PublishItem {
                blockchain_name, ..
            }
            | Self::ByKey {
                blockchain_name, ..
            }
            | Self::ByKeys {
                blockchain_name, ..
            }
            | Self::ByPublisher {
                blockchain_name, ..
            }
            | Self::ByPublishers {
                blockchain_name, ..
            }
            | Self::StreamItems {
                blockchain_name, ..
            }
            | Self::StreamPublishers {
                blockchain_name, ..
            }
            | Self::StreamKeys {
                blockchain_name, ..
            } => blockchain_name,
        }
    }

    /// The stream this operation targets.
    pub fn stream_name(&self) -> &str {
        match self {
            Self::PublishItem { stream_name, .. }
            | Self::ByKey { stream_name, .. }
            | Self::ByKeys { stream_name, .. }
            | Self::ByPublisher { stream_name, .. }
            | Self::ByPublishers { stream_name, .. }
            | Self::StreamItems { stream_name, .. }
            | Self::StreamPublishers { stream_name, .. }
            | Self::StreamKeys { stream_name, .. } => stream_name,
        }
    }

    /// `true` for the single write operation, `false` for the seven reads.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::PublishItem { .. })
    }
}
