use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "streamgate",
    about = "StreamGate — data-access gateway over ledger streams",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the StreamGate HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address, overriding the configuration file
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Allow cross-origin requests from any origin
    #[arg(long)]
    pub cors: bool,
}
