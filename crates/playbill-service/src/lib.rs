//! # playbill-service
//!
//! Thin orchestration layer between HTTP handlers and repositories.
//! Each operation forwards to its repository; the indirection keeps the
//! API crate free of store-level concerns.

pub mod movie;
pub mod performance;

pub use movie::MovieService;
pub use performance::PerformanceService;
