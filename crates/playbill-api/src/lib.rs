//! # playbill-api
//!
//! HTTP layer: axum handlers, router, shared application state,
//! query-parameter parsing, and error-to-response mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod params;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
