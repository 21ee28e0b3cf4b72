//! Movie service.

use std::sync::Arc;

use bson::oid::ObjectId;

use playbill_core::result::AppResult;
use playbill_core::types::pagination::PageRequest;
use playbill_database::repositories::MovieRepository;
use playbill_entity::movie::{CreateMovieRequest, Movie, UpdateMovieRequest};

/// Forwards movie operations to the repository.
#[derive(Debug, Clone)]
pub struct MovieService {
    repository: Arc<MovieRepository>,
}

impl MovieService {
    /// Create a new movie service.
    pub fn new(repository: Arc<MovieRepository>) -> Self {
        Self { repository }
    }

    /// List movies, returning the page of movies and the total count.
    pub async fn list(&self, page: PageRequest) -> AppResult<(Vec<Movie>, u64)> {
        self.repository.list(page).await
    }

    /// Get a movie by id; `Ok(None)` when absent.
    pub async fn get(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        self.repository.find_by_id(id).await
    }

    /// Search movies by name or original name.
    pub async fn search(&self, query: &str, page: PageRequest) -> AppResult<(Vec<Movie>, u64)> {
        self.repository.search(query, page).await
    }

    /// Movies carrying every requested tag.
    pub async fn filter_by_tags(
        &self,
        tags: &[String],
        page: PageRequest,
    ) -> AppResult<(Vec<Movie>, u64)> {
        self.repository.filter_by_tags(tags, page).await
    }

    /// Create a movie.
    pub async fn create(&self, request: CreateMovieRequest) -> AppResult<Movie> {
        self.repository.create(request).await
    }

    /// Partially update a movie.
    pub async fn update(&self, id: ObjectId, request: &UpdateMovieRequest) -> AppResult<Movie> {
        self.repository.update(id, request).await
    }

    /// Delete a movie.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
