//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Deadline for in-flight requests to finish once shutdown begins.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Cap on how long a single request may take end to end.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "hello-server")]
#[command(about = "A minimal HTTP greeting server with graceful shutdown")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
