mod config;
mod curve;
mod errors;
mod models;
mod server;
mod state;
mod trade;

use crate::errors::PayoffResult;

#[tokio::main]
async fn main() {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("payoff curve service starting");

    // Load config
    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(cfg).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}

async fn serve(cfg: config::AppConfig) -> PayoffResult<()> {
    let addr = cfg.bind_addr();
    tracing::info!(
        max_grid_points = cfg.max_grid_points,
        "server listening on {addr}"
    );

    let app = server::router(state::AppState::new(cfg));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    tracing::info!("server shutting down");
    Ok(())
}
