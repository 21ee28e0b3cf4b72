//! # playbill-entity
//!
//! Entity models for the Playbill workspace: stored document shapes,
//! API response shapes, and create/update request bodies for movies
//! and performances.

pub mod movie;
pub mod performance;

pub use movie::{CreateMovieRequest, Movie, MovieDocument, UpdateMovieRequest};
pub use performance::{
    CreatePerformanceRequest, Performance, PerformanceDocument, UpdatePerformanceRequest,
};
