//! Binary entrypoint for the warehouse HTTP server.
//!
//! Configuration comes from the environment; see [`ServerConfig::from_env`].
//! Log filtering follows `RUST_LOG` (default: "info").

use tracing_subscriber::EnvFilter;

use warehouse_server::config::ServerConfig;
use warehouse_server::router::build_router;
use warehouse_server::state::AppState;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().expect("Failed to read server configuration");

    let state = AppState::with_validation(config.validation);
    let app = build_router(state);

    tracing::info!(
        validation = ?config.validation,
        "warehouse server starting on {}",
        config.bind_addr
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
