#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use product_service::{AppError, Result, app, config::AppConfig};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Product service failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Product service stopped");
}

async fn run() -> Result<()> {
    tracing::info!("Product service starting");

    let config = AppConfig::from_env()?;
    let app = app::build(&config).await?;

    let addr = config.server_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind to {}: {}", addr, e)))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, draining in-flight requests"),
        _ = terminate => tracing::info!("Received SIGTERM, draining in-flight requests"),
    }
}
