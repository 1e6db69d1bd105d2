use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bus_locator::arrivals::{HintEta, RandomEta};
use bus_locator::catalog::Catalog;
use bus_locator::config::{EtaMode, ServerConfig};
use bus_locator::engine::Engine;
use bus_locator::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bus_locator=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Load the catalog (fail fast if a configured file is unusable)
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::load(path)?
        }
        None => Catalog::rea_vaya(),
    };
    info!(
        stations = catalog.len(),
        routes = catalog.routes().len(),
        "catalog ready"
    );

    let engine = match config.eta_mode {
        EtaMode::Hint => Engine::new(catalog, HintEta::new(RandomEta)),
        EtaMode::Random => Engine::new(catalog, RandomEta),
    };

    let addr = config.addr;
    let app = create_router(AppState::new(engine, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Bus locator listening on http://{addr}");
    info!("  GET  /health                       - Health check");
    info!("  GET  /api/stations/nearby          - Stations nearest a location");
    info!("  GET  /api/stations/:id/arrivals    - Buses boarding at a station");
    info!("  GET  /api/stations/:id/map         - Map link for a station");
    info!("  GET  /api/fares                    - Fare for a distance");

    axum::serve(listener, app).await?;
    Ok(())
}
