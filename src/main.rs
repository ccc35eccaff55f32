// src/main.rs

//! # Main Application Entry Point
//!
//! Sets up logging, builds the application state and router, and serves the
//! song catalog on the configured port (3001) until SIGINT or SIGTERM.

use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use musik_api::{config::DEFAULT_LOG_FILTER, create_router, AppState, Config};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install SIGINT handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, starting graceful shutdown"),
        () = terminate => info!("received SIGTERM, starting graceful shutdown"),
    }
}

/// The main entry point for the Tokio runtime.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    // 1. Setup Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Build state and router
    let config = Config::default();
    let addr = config.socket_addr();
    let public_url = config.public_url();

    info!(songs_file = %config.songs_file.display(), "Starting Musik M-O API...");

    let app = create_router(AppState::new(config));

    // 3. Bind and serve
    let listener = TcpListener::bind(addr).await?;

    info!("Server running at {}", public_url);
    info!("Health check available at {}/api/health", public_url);
    info!("API docs available at {}/api-docs", public_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}
