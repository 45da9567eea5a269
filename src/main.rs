use std::sync::Arc;
use tracing::{error, info};

use forum_api::{
    config::Config,
    db,
    middleware::init_tracing,
    server::{create_router, serve, AppState},
    store::Storage,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Open the connection pool and probe it
    let pool = match db::connect(
        &config.db.addr,
        config.db.max_open_conns,
        config.db.max_idle_conns,
        &config.db.max_idle_time,
    )
    .await
    {
        Ok(pool) => {
            info!("Database connection pool established");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let store = Storage::new(pool);
    let addr = config.listen_addr();
    let state = Arc::new(AppState { config, store });

    // Create the Axum router with all endpoints
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr.as_str()).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server with graceful shutdown handling
    if let Err(e) = serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}
