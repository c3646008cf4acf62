use station_server::config::ServerConfig;
use station_server::logging::{LoggingConfig, init_logging};
use station_server::repository::InMemoryStationRepository;
use station_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    let config = ServerConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        e
    })?;

    // Seed the demo data set
    let repository = InMemoryStationRepository::seeded(config.seed_count, config.rng_seed);
    info!(
        stations = config.seed_count,
        rng_seed = ?config.rng_seed,
        "seeded station repository"
    );

    let app = create_router(AppState::new(repository));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "station server listening");
    info!("  GET    /health        - Health check");
    info!("  GET    /stations      - List stations");
    info!("  GET    /stations/:id  - Fetch a station");
    info!("  POST   /stations      - Create a station");
    info!("  PUT    /stations/:id  - Replace a station");
    info!("  DELETE /stations/:id  - Delete a station");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("received shutdown signal");
        })
        .await?;

    Ok(())
}
