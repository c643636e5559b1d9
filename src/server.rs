//! Server lifecycle management
//!
//! Brings the listener up, keeps it serving until a termination signal
//! arrives, then drains in-flight requests within a fixed deadline. Bind
//! and shutdown failures are fatal; the caller is expected to log them and
//! exit non-zero.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::info;

use crate::api::create_router;
use crate::config::{Config, SHUTDOWN_TIMEOUT};
use crate::utils::shutdown_signal;

/// Fatal server errors. Neither kind is retried.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(String),

    #[error("Graceful shutdown did not complete within {0:?}")]
    ShutdownTimeout(Duration),
}

/// Bind the configured address and serve until a termination signal arrives.
///
/// Returns once graceful shutdown has completed, or with the first fatal
/// error encountered.
pub async fn run(config: &Config) -> Result<(), ServerError> {
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET /       - Greeting (optional ?name= query parameter)");
    info!("  GET /health - Health check");

    run_with_shutdown(listener, create_router(), shutdown_signal(), SHUTDOWN_TIMEOUT).await
}

/// Serve `app` on `listener` until `signal` completes, then stop accepting
/// new connections and wait up to `deadline` for in-flight requests.
///
/// The accept loop runs on a spawned task; this function stays suspended on
/// `signal` until then. Requests still in flight past the deadline are
/// abandoned and reported as [`ServerError::ShutdownTimeout`].
pub async fn run_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    deadline: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });

    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server_task => {
            // The accept loop ended before any shutdown was requested.
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(ServerError::Serve(e.to_string())),
                Err(e) => Err(ServerError::Serve(e.to_string())),
            };
        }
        _ = signal => {
            info!("Shutting down server...");
        }
    }

    let _ = shutdown_tx.send(());

    match timeout(deadline, server_task).await {
        Ok(Ok(Ok(()))) => {
            info!("Server exited gracefully");
            Ok(())
        }
        Ok(Ok(Err(e))) => Err(ServerError::Serve(e.to_string())),
        Ok(Err(e)) => Err(ServerError::Serve(e.to_string())),
        Err(_) => Err(ServerError::ShutdownTimeout(deadline)),
    }
}
