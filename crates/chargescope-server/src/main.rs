use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

mod config;
mod params;
mod routes;

use chargescope_storage::{DatasetPaths, DatasetStore};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config file: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.logging.level.to_lowercase())
            }),
        )
        .init();

    info!("Starting chargescope server v{}", env!("CARGO_PKG_VERSION"));
    info!("  Host: {}", config.server.host);
    info!("  Port: {}", config.server.port);
    info!("  Data dir: {}", config.data.dir.display());

    let store = Arc::new(DatasetStore::open(DatasetPaths::in_dir(&config.data.dir)));

    // Force the one-time load before accepting requests. The dashboard has
    // no degraded mode: without data there is nothing to serve.
    let dataset = match store.dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded {} sessions across {} stations ({} events)",
        dataset.sessions.len(),
        dataset.stations.len(),
        dataset.events.len()
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let app = routes::router(store);
    axum::serve(listener, app).await?;

    Ok(())
}
