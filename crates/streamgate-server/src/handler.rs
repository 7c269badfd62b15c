use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::response::Json;
use serde_json::{json, Value};

use streamgate_gateway::{
    build, dispatch, AddNode, ConnectToAdminNode, GatewayError, GatewayResult, RawParams,
};
use streamgate_node::NodeClient;
use streamgate_types::StreamQueryDescriptor;

use crate::error::ApiError;

/// Shared request state: one node client behind an `Arc`, safe for
/// concurrent use. Everything else is request-local.
#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn NodeClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn NodeClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &dyn NodeClient {
        self.client.as_ref()
    }
}

fn decode_query(query: Option<&str>) -> Result<RawParams, ApiError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or(""))
        .map_err(|e| ApiError::Gateway(GatewayError::Unclassified(e.to_string())))?;
    Ok(RawParams::from_pairs(pairs))
}

/// Decode, build, dispatch, pass the node's result through unmodified.
async fn run_query(
    state: &AppState,
    query: Option<&str>,
    builder: fn(&RawParams) -> GatewayResult<StreamQueryDescriptor>,
) -> Result<Json<Value>, ApiError> {
    let params = decode_query(query)?;
    let descriptor = builder(&params)?;
    let result = dispatch(state.client(), &descriptor).await?;
    Ok(Json(result))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

pub async fn publish_item(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(v)| v);
    let descriptor = build::publish_item(body.as_ref())?;
    dispatch(state.client(), &descriptor).await?;
    // Fixed acknowledgment; the stored item is not echoed back.
    Ok(Json(json!({ "status": "Data published!" })))
}

pub async fn get_items_by_key(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::items_by_key).await
}

pub async fn get_items_by_keys(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::items_by_keys).await
}

pub async fn get_items_by_publisher(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::items_by_publisher).await
}

pub async fn get_items_by_publishers(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::items_by_publishers).await
}

pub async fn get_stream_items(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::stream_items).await
}

pub async fn get_stream_publishers(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::stream_publishers).await
}

pub async fn get_stream_keys(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, ApiError> {
    run_query(&state, query.as_deref(), build::stream_keys).await
}

pub async fn connect_to_admin_node(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(v)| v);
    let command = ConnectToAdminNode::from_body(body.as_ref())?;
    let wallet_address = command.execute(state.client()).await?;
    Ok(Json(json!({ "walletAddress": wallet_address })))
}

pub async fn add_node(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(v)| v);
    let command = AddNode::from_body(body.as_ref())?;
    let wallet_address = command.execute(state.client()).await?;
    Ok(Json(json!({ "walletAddress": wallet_address })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_query_keeps_duplicate_bracketed_names() {
        let params = decode_query(Some("keys%5B%5D=a&keys%5B%5D=b")).unwrap();
        assert_eq!(params.values("keys[]"), ["a", "b"]);
    }

    #[test]
    fn decode_query_handles_missing_query() {
        assert!(decode_query(None).unwrap().is_empty());
    }
}
