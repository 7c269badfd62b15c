use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use streamgate_gateway::GatewayError;
use streamgate_node::NodeError;

/// Server lifecycle failures (bind, config). Request-path failures are
/// [`ApiError`].
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Any failure a request can produce, translated once at the boundary.
///
/// Three error classes collapse to two body shapes under one status code:
/// a ledger-domain failure responds with the node's own info payload,
/// unmodified; everything else responds with
/// `{"error": {"message": <text>}}`. Success and failure are distinguished
/// by status code only, failure kinds by body shape only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Node(#[from] NodeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::Node(NodeError::Domain { info }) => info,
            other => json!({ "error": { "message": other.to_string() } }),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_use_the_generic_envelope() {
        let response = ApiError::from(GatewayError::empty("blockchain name")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn domain_and_generic_failures_share_a_status_code() {
        let domain = ApiError::from(NodeError::domain(-708, "not found")).into_response();
        let generic = ApiError::from(NodeError::Unavailable("down".into())).into_response();
        assert_eq!(domain.status(), generic.status());
    }
}
