//! Hello Server - A minimal HTTP greeting server with graceful shutdown
//!
//! This library provides a single greeting endpoint and a lifecycle manager
//! that drains in-flight requests before exiting when the process receives
//! SIGINT or SIGTERM.

pub mod api;
pub mod config;
pub mod greeting;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use server::{run, ServerError};
pub use utils::signals::shutdown_signal;
