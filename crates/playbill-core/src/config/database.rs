//! Document store configuration.

use serde::{Deserialize, Serialize};

/// MongoDB connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URI.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Collection holding movie documents.
    #[serde(default = "default_movie_collection")]
    pub movie_collection: String,
    /// Collection holding performance documents.
    #[serde(default = "default_performance_collection")]
    pub performance_collection: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_movie_collection() -> String {
    "movies".to_string()
}

fn default_performance_collection() -> String {
    "theatre".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}
