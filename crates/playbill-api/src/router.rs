//! Route definitions for the Playbill HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via axum's
//! `State` extractor.

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(movie_routes())
        .merge(performance_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Movie CRUD, search, and tag filter.
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movie",
            get(handlers::movie::list_movies).post(handlers::movie::create_movie),
        )
        .route("/movie/search", get(handlers::movie::search_movies))
        .route(
            "/movie/filter/tags",
            get(handlers::movie::filter_movies_by_tags),
        )
        .route(
            "/movie/{id}",
            get(handlers::movie::get_movie)
                .put(handlers::movie::update_movie)
                .delete(handlers::movie::delete_movie),
        )
}

/// Performance CRUD, search, and tag filter.
fn performance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/performance",
            get(handlers::performance::list_performances)
                .post(handlers::performance::create_performance),
        )
        .route(
            "/performance/search",
            get(handlers::performance::search_performances),
        )
        .route(
            "/performance/filter/tags",
            get(handlers::performance::filter_performances_by_tags),
        )
        .route(
            "/performance/{id}",
            get(handlers::performance::get_performance)
                .put(handlers::performance::update_performance)
                .delete(handlers::performance::delete_performance),
        )
}

/// Liveness and store connectivity.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
