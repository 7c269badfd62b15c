use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use streamgate_node::NodeClient;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// StreamGate HTTP server.
pub struct StreamGateServer {
    config: ServerConfig,
    state: AppState,
}

impl StreamGateServer {
    pub fn new(config: ServerConfig, client: Arc<dyn NodeClient>) -> Self {
        Self {
            config,
            state: AppState::new(client),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let router = build_router(self.state.clone());
        if self.config.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("StreamGate listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamgate_node::MemoryNode;

    #[test]
    fn server_construction() {
        let server = StreamGateServer::new(ServerConfig::default(), Arc::new(MemoryNode::new()));
        assert_eq!(server.config().bind_addr, "127.0.0.1:8700".parse().unwrap());
    }

    #[test]
    fn router_builds_with_and_without_cors() {
        let config = ServerConfig {
            cors_permissive: true,
            ..ServerConfig::default()
        };
        let server = StreamGateServer::new(config, Arc::new(MemoryNode::new()));
        let _router = server.router();
    }
}
