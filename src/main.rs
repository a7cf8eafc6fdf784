use std::net::SocketAddr;
use std::sync::Arc;

use chemgpt_spectro::{config::Config, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };

    let port = config.port;
    let state = Arc::new(AppState::from_config(config));
    tracing::info!("Spectroscopy backend: {}", state.backend.label());

    let app = handlers::build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
