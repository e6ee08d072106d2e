mod config;
mod hub;
mod routes;
mod state;

use envelopes::{MessageType, Sender, handler};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let addr = config.bind_addr();
    let state = state::AppState::new(config);

    state
        .hub
        .match_type(MessageType::Heartbeat, handler(|_| tracing::debug!("hub: heartbeat")))
        .await
        .expect("handler registration failed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "flexkit hub listening");
    axum::serve(listener, app).await.expect("server failed");
}
