//! Member directory web service.
//!
//! Serves the roster loaded by [`roster_ingest::RecordLoader`] as an HTML
//! index page and two read-only JSON endpoints:
//!
//! - `GET /member/:id`: one flag-decorated member by position
//! - `GET /api/search`: filtered members plus total and filtered counts

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError};
pub use routes::build_router;
pub use state::AppState;

use std::sync::Arc;

use tokio::net::TcpListener;

/// Binds `config.listen_addr()` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let addr = config.listen_addr();
    let state = Arc::new(AppState::new(&config));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        source = %config.source.display(),
        "Starting member directory"
    );
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
