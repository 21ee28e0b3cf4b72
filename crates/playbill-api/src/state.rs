//! Application state shared across all handlers.

use std::sync::Arc;

use playbill_core::config::AppConfig;
use playbill_database::MongoStore;
use playbill_service::{MovieService, PerformanceService};

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// cheap to clone; the store handle shares one underlying pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Shared document store handle, used for health checks.
    pub store: MongoStore,
    /// Movie service.
    pub movie_service: Arc<MovieService>,
    /// Performance service.
    pub performance_service: Arc<PerformanceService>,
}
