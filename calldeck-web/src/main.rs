use std::net::SocketAddr;

use tracing_subscriber;

use calldeck_web::client::FetchOverrides;
use calldeck_web::config;
use calldeck_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("failed to load config, using defaults: {e:#}");
            config::CalldeckConfig::default()
        }
    };
    let port = config.listen_port();
    let state = AppState::new(config);

    // Kick off the initial remote fetches with default parameters
    state.ensure_fresh(&FetchOverrides::default()).await;

    // Check for built frontend in frontend/dist
    let static_dir = std::env::current_dir()?.join("frontend").join("dist");
    let app = if static_dir.exists() {
        tracing::info!("Serving static files from {}", static_dir.display());
        calldeck_web::build_router_with_static(state, &static_dir.to_string_lossy())
    } else {
        tracing::info!("No frontend build found, serving API only");
        calldeck_web::build_router(state)
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("calldeck-web listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
