// MCP adapter servers: each binary exposes one vendor REST API slice as
// tools over JSON-RPC 2.0 on stdin/stdout.

pub mod adapters;
pub mod protocol;
pub mod server;

pub use server::McpServer;

use anyhow::Result;
use std::sync::Arc;
use veneer_core::{AdapterConfig, Catalog, Dispatcher, Transport, VeneerResult};

/// Shared entry point for adapter binaries: install tracing (stderr only;
/// stdout is the protocol channel), read the token from the environment,
/// build the shared transport, and serve until stdin closes.
pub async fn run_stdio(name: &str, base_url: &str, catalog: VeneerResult<Catalog>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = catalog?;
    let config = AdapterConfig::from_env(base_url)?;
    let transport = Transport::new(Arc::new(config))?;
    let dispatcher = Dispatcher::new(catalog, transport);

    let server = McpServer::new(name, env!("CARGO_PKG_VERSION"), dispatcher);
    server.run().await
}
