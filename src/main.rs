use mcp_jadx_server::config::ServerConfig;
use mcp_jadx_server::server::McpServer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Log to stderr — stdout carries the protocol.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mcp_jadx_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-jadx-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let mut server = match McpServer::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("mcp-jadx-server: startup error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = server.run().await {
        eprintln!("mcp-jadx-server: fatal error: {e}");
        std::process::exit(1);
    }
}
