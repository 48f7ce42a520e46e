//! Multitimer - A state-managed HTTP server for multiple named timers
//!
//! This is the main entry point for the multitimer application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use multitimer::{
    api::create_router, config::Config, state::AppState, tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("multitimer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting multitimer server v1.0.0");
    info!(
        "Configuration: host={}, port={}, max_timers={}, tick={}ms",
        config.host, config.port, config.max_timers, config.tick_ms
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.max_timers,
        config.tick_ms,
    ));

    // Start the display tick background task
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(tick_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST   /timers            - Create a timer (countdown or stopwatch)");
    info!("  GET    /timers            - List timers with formatted displays");
    info!("  GET    /timers/:id        - Single timer snapshot");
    info!("  POST   /timers/:id/start  - Start a timer");
    info!("  POST   /timers/:id/pause  - Pause a running timer");
    info!("  POST   /timers/:id/resume - Resume a paused timer");
    info!("  POST   /timers/:id/reset  - Reset a timer to idle");
    info!("  POST   /timers/:id/mute   - Toggle the mute flag");
    info!("  DELETE /timers/:id        - Remove a timer");
    info!("  GET    /status            - Server status");
    info!("  GET    /health            - Health check");

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
