use serde_json::Value;
use streamgate_node::{NodeClient, NodeResult};
use streamgate_types::StreamQueryDescriptor;

/// Map one descriptor to exactly one node client call.
///
/// Pure selection: no retries, no state between calls, no reshaping of the
/// node's result. Failures propagate for the caller-facing boundary to
/// translate.
pub async fn dispatch(
    client: &dyn NodeClient,
    descriptor: &StreamQueryDescriptor,
) -> NodeResult<Value> {
    tracing::trace!(
        blockchain = descriptor.blockchain_name(),
        stream = descriptor.stream_name(),
        write = descriptor.is_write(),
        "dispatching to node client"
    );
    match descriptor {
        StreamQueryDescriptor::PublishItem {
            blockchain_name,
            stream_name,
            keys,
            payload,
        } => {
            client
                .publish_item(blockchain_name, stream_name, keys, payload)
                .await
        }
        StreamQueryDescriptor::ByKey {
            blockchain_name,
            stream_name,
            key,
            verbose,
            count,
            start,
            local_ordering,
        } => {
            client
                .items_by_key(
                    blockchain_name,
                    stream_name,
                    key,
                    *verbose,
                    *count,
                    *start,
                    *local_ordering,
                )
                .await
        }
        StreamQueryDescriptor::ByKeys {
            blockchain_name,
            stream_name,
            keys,
            verbose,
        } => {
            client
                .items_by_keys(blockchain_name, stream_name, keys, *verbose)
                .await
        }
        StreamQueryDescriptor::ByPublisher {
            blockchain_name,
            stream_name,
            publisher,
            verbose,
            count,
            start,
            local_ordering,
        } => {
            client
                .items_by_publisher(
                    blockchain_name,
                    stream_name,
                    publisher,
                    *verbose,
                    *count,
                    *start,
                    *local_ordering,
                )
                .await
        }
        StreamQueryDescriptor::ByPublishers {
            blockchain_name,
            stream_name,
            publishers,
            verbose,
        } => {
            client
                .items_by_publishers(blockchain_name, stream_name, publishers, *verbose)
                .await
        }
        StreamQueryDescriptor::StreamItems {
            blockchain_name,
            stream_name,
            verbose,
            count,
            start,
            local_ordering,
        } => {
            client
                .stream_items(
                    blockchain_name,
                    stream_name,
                    *verbose,
                    *count,
                    *start,
                    *local_ordering,
                )
                .await
        }
        StreamQueryDescriptor::StreamPublishers {
            blockchain_name,
            stream_name,
            publishers,
            verbose,
            count,
            start,
            local_ordering,
        } => {
            client
                .stream_publishers(
                    blockchain_name,
                    stream_name,
                    publishers.as_deref(),
                    *verbose,
                    *count,
                    *start,
                    *local_ordering,
                )
                .await
        }
        StreamQueryDescriptor::StreamKeys {
            blockchain_name,
            stream_name,
            keys,
            verbose,
            count,
            start,
            local_ordering,
        } => {
            client
                .stream_keys(
                    blockchain_name,
                    stream_name,
                    keys.as_deref(),
                    *verbose,
                    *count,
                    *start,
                    *local_ordering,
                )
                .await
        }
    }
}
