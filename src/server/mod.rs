// src/server/mod.rs
//! HTTP front-end: serves the post index, posts by slug and pages by id.

mod app;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

pub use app::create_router;
pub use error::{ErrorPage, ServerError};
pub use state::AppState;

use crate::api::{NotionHttpClient, NotionRepository};
use crate::config::BlogConfig;

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the address cannot be
/// bound.
pub async fn run_server(config: BlogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repository: Arc<dyn NotionRepository> = Arc::new(NotionHttpClient::new(&config.api_key)?);

    let state = Arc::new(AppState::new(
        repository,
        config.database_id.clone(),
        config.children_paging,
        config.site.clone(),
    ));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!(
        "Serving database {} on http://{}",
        config.database_id,
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, stopping server...");
}
