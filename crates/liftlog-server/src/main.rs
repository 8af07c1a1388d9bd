//! Telemetry server binary for the Liftlog service.
//!
//! This is the main entry point that wires together the `PostgreSQL`
//! store, the dataset logic, and the HTTP API. It loads configuration,
//! runs migrations, and serves requests until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `liftlog.yaml`
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Wire the telemetry store into the API state
//! 5. Serve HTTP requests

mod config;

use std::path::Path;
use std::sync::Arc;

use liftlog_api::state::{AppState, FloorRange};
use liftlog_api::{ServerConfig, start_server};
use liftlog_db::{PostgresConfig, PostgresPool, TelemetryStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LiftlogConfig;

/// Default path of the YAML configuration file.
const CONFIG_PATH: &str = "liftlog.yaml";

/// Application entry point for the telemetry server.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("liftlog-server starting");

    // 2. Load configuration. A missing file is not an error; local runs
    // use the defaults plus DATABASE_URL.
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        LiftlogConfig::from_file(config_path)?
    } else {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
        LiftlogConfig::parse("{}")?
    };
    info!(
        host = config.server.host,
        port = config.server.port,
        min_floor = config.building.min_floor,
        max_floor = config.building.max_floor,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and run migrations.
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // 4. Wire the telemetry store into the API state.
    let store = TelemetryStore::new(pool.pool().clone());
    let floors = FloorRange {
        min: config.building.min_floor,
        max: config.building.max_floor,
    };
    let state = Arc::new(AppState::new(store, floors));

    // 5. Serve HTTP requests.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    info!("liftlog-server stopped");
    Ok(())
}
