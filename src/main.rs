//! Hello Server - A minimal HTTP greeting server with graceful shutdown
//!
//! This is the main entry point for the hello-server application.

use tracing::info;

use hello_server::{config::Config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "hello_server={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting hello-server v0.1.0");
    info!("Configuration: host={}, port={}", config.host, config.port);

    if let Err(e) = server::run(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
    Ok(())
}
