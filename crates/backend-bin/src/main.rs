use backend_lib::{config::Settings, router, seed, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize configuration; fall back to the packaged defaults file
    let config = Settings::load().or_else(|_| {
        tracing::info!("trying to load config from ./config/default.toml");
        Settings::load_from("./config/default.toml")
    })?;

    // Seed users and capabilities
    let seed_data = seed::load_seed(&config.seed.path)?;

    // Create application state
    let bind = (config.server.host.clone(), config.server.port);
    let state = Arc::new(AppState::new(config, seed_data)?);

    // Create the router
    let app = router::create_router(state);

    // Start the server
    let addr: SocketAddr = format!("{}:{}", bind.0, bind.1).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
