use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::network::Network;
use metro_server::planner::PlannerConfig;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "metro server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Load lines and build the network (fail fast on a bad table)
    let table = config.line_table()?;
    let network = Network::from_lines(&table)?;

    let state = AppState::new(network, PlannerConfig::default());
    let stats = &state.stats;
    info!(
        stations = stats.stations,
        connections = stats.connections,
        lines = stats.lines,
        transfers = ?stats.transfer_stations,
        "network loaded"
    );

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Metro route planner listening on http://{}", config.bind_addr);
    info!("API endpoints: GET /health, /api/stations/search, /api/network, /api/stats, /api/route");

    axum::serve(listener, app).await?;
    Ok(())
}
