use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// The static route table: nine gateway operations plus liveness,
/// constructed once at process start and never mutated afterwards.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/data/publish_item", post(handler::publish_item))
        .route("/data/get_items_by_key", get(handler::get_items_by_key))
        .route("/data/get_items_by_keys", get(handler::get_items_by_keys))
        .route(
            "/data/get_items_by_publisher",
            get(handler::get_items_by_publisher),
        )
        .route(
            "/data/get_items_by_publishers",
            get(handler::get_items_by_publishers),
        )
        .route("/data/get_stream_items", get(handler::get_stream_items))
        .route(
            "/data/get_stream_publishers",
            get(handler::get_stream_publishers),
        )
        .route("/data/get_stream_keys", get(handler::get_stream_keys))
        .route("/nodes/connect_to_admin_node", post(handler::connect_to_admin_node))
        .route("/nodes/add_node", post(handler::add_node))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
