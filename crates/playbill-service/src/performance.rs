//! Performance service.

use std::sync::Arc;

use bson::oid::ObjectId;

use playbill_core::result::AppResult;
use playbill_core::types::pagination::PageRequest;
use playbill_database::repositories::PerformanceRepository;
use playbill_entity::performance::{
    CreatePerformanceRequest, Performance, UpdatePerformanceRequest,
};

/// Forwards performance operations to the repository.
#[derive(Debug, Clone)]
pub struct PerformanceService {
    repository: Arc<PerformanceRepository>,
}

impl PerformanceService {
    /// Create a new performance service.
    pub fn new(repository: Arc<PerformanceRepository>) -> Self {
        Self { repository }
    }

    /// List performances, returning the page and the total count.
    pub async fn list(&self, page: PageRequest) -> AppResult<(Vec<Performance>, u64)> {
        self.repository.list(page).await
    }

    /// Get a performance by id; `Ok(None)` when absent.
    pub async fn get(&self, id: ObjectId) -> AppResult<Option<Performance>> {
        self.repository.find_by_id(id).await
    }

    /// Search performances by name or description.
    pub async fn search(
        &self,
        query: &str,
        page: PageRequest,
    ) -> AppResult<(Vec<Performance>, u64)> {
        self.repository.search(query, page).await
    }

    /// Performances carrying every requested tag.
    pub async fn filter_by_tags(
        &self,
        tags: &[String],
        page: PageRequest,
    ) -> AppResult<(Vec<Performance>, u64)> {
        self.repository.filter_by_tags(tags, page).await
    }

    /// Create a performance.
    pub async fn create(&self, request: CreatePerformanceRequest) -> AppResult<Performance> {
        self.repository.create(request).await
    }

    /// Partially update a performance.
    pub async fn update(
        &self,
        id: ObjectId,
        request: &UpdatePerformanceRequest,
    ) -> AppResult<Performance> {
        self.repository.update(id, request).await
    }

    /// Delete a performance.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
