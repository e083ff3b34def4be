use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod app;
mod http;
mod simulator;
mod ws;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodcast_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit path > MOODCAST_CONFIG env > ~/.moodcast/moodcast.toml
    let config_path = std::env::var("MOODCAST_CONFIG").ok();
    let config = moodcast_core::config::MoodcastConfig::load(config_path.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            moodcast_core::config::MoodcastConfig::default()
        });
    config.validate()?;

    let bind = config.server.bind.clone();
    let port = config.server.port;
    let sim_config = config.simulator.clone();

    let catalog = moodcast_catalog::StateCatalog::new(&config.states)?;
    info!(
        states = catalog.len(),
        total_weight = catalog.total_weight(),
        "state catalog loaded"
    );

    let registry = Arc::new(ws::registry::ClientRegistry::new());
    let publisher = ws::publish::StatePublisher::new(Arc::clone(&registry));

    let state = Arc::new(app::AppState::new(config, Arc::clone(&registry)));
    let router = app::build_router(state);

    // spawn simulation loop in background
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let sim = simulator::Simulator::new(catalog, publisher, sim_config);
    tokio::spawn(async move { sim.run(shutdown_rx).await });

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Moodcast gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    // signal simulator to stop
    let _ = shutdown_tx.send(true);
    Ok(())
}
