//! HTTP request handlers, organized by resource.

pub mod health;
pub mod movie;
pub mod performance;
