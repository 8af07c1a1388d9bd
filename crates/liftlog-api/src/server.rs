//! Telemetry HTTP server lifecycle.
//!
//! [`start_server`] binds the configured address and serves the router
//! until the process receives `Ctrl-C`, at which point in-flight requests
//! are allowed to finish before the call returns.

use std::net::SocketAddr;
use std::sync::Arc;

use liftlog_core::TelemetrySource;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Listener settings for the telemetry server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

/// Errors that can occur while starting or running the telemetry server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured host/port pair is not a valid socket address.
    #[error("invalid listen address {addr}: {source}")]
    Address {
        /// The offending address string.
        addr: String,
        /// The underlying parse error.
        source: std::net::AddrParseError,
    },

    /// The listener could not bind to the address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that was being bound.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The server stopped with a fatal I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the telemetry HTTP server to completion.
///
/// Returns `Ok(())` after a `Ctrl-C`-initiated graceful shutdown.
///
/// # Errors
///
/// Returns a [`ServerError`] if the address is invalid, the listener
/// cannot bind, or serving fails.
pub async fn start_server<S>(
    config: &ServerConfig,
    state: Arc<AppState<S>>,
) -> Result<(), ServerError>
where
    S: TelemetrySource + Send + Sync + 'static,
{
    let raw = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = raw
        .parse()
        .map_err(|source| ServerError::Address { addr: raw, source })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, "Telemetry API listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Telemetry API shut down");
    Ok(())
}

/// Resolves when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
    }
}
