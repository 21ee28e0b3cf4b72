//! Response envelope types.

use serde::{Deserialize, Serialize};

use playbill_core::types::pagination::PageMeta;
use playbill_entity::movie::Movie;
use playbill_entity::performance::Performance;

/// Paginated movie list body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    /// Movies on the requested page.
    pub movies: Vec<Movie>,
    /// Navigation metadata for the list.
    pub pagination: PageMeta,
}

/// Paginated performance list body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceListResponse {
    /// Performances on the requested page.
    pub performances: Vec<Performance>,
    /// Navigation metadata for the list.
    pub pagination: PageMeta,
}

/// Success body for operations with no entity payload (delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    /// HTTP status code echoed in the body.
    pub code: u16,
    /// Human-readable outcome description.
    pub message: String,
}
