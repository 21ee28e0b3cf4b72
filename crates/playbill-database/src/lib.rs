//! # playbill-database
//!
//! MongoDB connection management and concrete repository
//! implementations for the Playbill entities.

pub mod connection;
pub mod repositories;

pub use connection::MongoStore;
