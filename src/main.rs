//! Playbill server — movie and performance listings API.
//!
//! Entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use playbill_api::state::AppState;
use playbill_core::config::AppConfig;
use playbill_core::error::AppError;
use playbill_database::repositories::{MovieRepository, PerformanceRepository};
use playbill_database::MongoStore;
use playbill_service::{MovieService, PerformanceService};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PLAYBILL_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Playbill v{}", env!("CARGO_PKG_VERSION"));

    // One store handle for the whole process, injected into each
    // repository rather than held in global state.
    let store = MongoStore::connect(&config.database).await?;

    let movie_repo = Arc::new(MovieRepository::new(&store));
    let performance_repo = Arc::new(PerformanceRepository::new(&store));

    let movie_service = Arc::new(MovieService::new(Arc::clone(&movie_repo)));
    let performance_service = Arc::new(PerformanceService::new(Arc::clone(&performance_repo)));

    let state = AppState {
        config: Arc::new(config.clone()),
        store: store.clone(),
        movie_service,
        performance_service,
    };

    let app = playbill_api::build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Playbill server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    store.close().await;
    tracing::info!("Playbill server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
