use std::sync::Arc;

use anyhow::Context;

use streamgate_node::MemoryNode;
use streamgate_server::{ServerConfig, StreamGateServer};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.cors {
        config.cors_permissive = true;
    }

    // The in-memory node is the only shipped client; a networked RPC client
    // plugs in through the same NodeClient trait.
    let node = Arc::new(MemoryNode::new());
    tracing::info!(wallet = %node.wallet_address(), "starting with in-memory ledger node");

    let server = StreamGateServer::new(config, node);
    tokio::runtime::Runtime::new()
        .context("starting tokio runtime")?
        .block_on(server.serve())
        .context("serving")?;
    Ok(())
}
