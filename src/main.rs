//! ScrollForge Server
//!
//! Accepts PDF uploads, paginates their paragraphs into stored HTML pages,
//! and serves token-scoped page lookups.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollforge_server::config::Config;
use scrollforge_server::db;
use scrollforge_server::extract::PdfTextExtractor;
use scrollforge_server::routes;
use scrollforge_server::state::AppState;
use scrollforge_server::storage::S3Client;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrollforge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        Config::default()
    });

    tracing::info!("Starting ScrollForge Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("S3 endpoint: {}", config.storage.endpoint);
    tracing::info!("S3 bucket: {}", config.storage.bucket);

    // Initialize S3 client
    let s3_client = S3Client::new(&config.storage)
        .await
        .expect("Failed to initialize S3 client");

    // Initialize database
    let db_pool = db::create_pool(&config.database.url)
        .await
        .expect("Failed to initialize database");
    tracing::info!("Database initialized at {}", config.database.url);

    // Create application state
    let app_state = AppState::new(Arc::new(s3_client), db_pool, Arc::new(PdfTextExtractor));

    let app = routes::router(app_state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid server address");
    tracing::info!("ScrollForge Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
