use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::info;

use crate::{
    config::Config,
    handlers::health_check,
    middleware::apply_middleware,
    store::Storage,
};

/// State shared with every handler.
pub struct AppState {
    pub config: Config,
    pub store: Storage,
}

/// Create the Axum router with all endpoints and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let v1 = Router::new()
        // Health check endpoint
        .route("/health", get(health_check));

    let router = Router::new()
        .nest("/v1", v1)
        .with_state(state);

    apply_middleware(router)
}

/// Serves `router` until Ctrl+C or SIGTERM is received.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
