//! # Atrium Server
//!
//! Main entry point for the Atrium user directory service. Wires the
//! in-memory repository through the service layer into the Axum router and
//! serves it until a shutdown signal arrives.

use atrium_config::ConfigLoader;
use atrium_core::{DirectoryError, DirectoryResult};
use atrium_repository::InMemoryUserRepository;
use atrium_rest::{create_router, AppState};
use atrium_service::{UserService, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting Atrium User Directory...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> DirectoryResult<()> {
    let config = ConfigLoader::from_default_location().load()?;

    info!("Environment: {}", config.app.environment);

    // The directory starts with one known record; everything else lives and
    // dies with the process.
    let user_repository = Arc::new(InMemoryUserRepository::seeded());
    let user_service: Arc<dyn UserService> =
        Arc::new(UserServiceImpl::new(user_repository));

    let app_state = AppState::new(user_service);
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DirectoryError::internal(format!("Failed to bind {addr}: {e}")))?;

    startup::print_startup_info(&config.server.host, config.server.port);
    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DirectoryError::internal(format!("Server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atrium=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

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
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
