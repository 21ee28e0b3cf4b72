//! Movie CRUD and query handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use playbill_core::error::AppError;
use playbill_core::types::pagination::PageMeta;
use playbill_entity::movie::{CreateMovieRequest, Movie, UpdateMovieRequest};

use crate::dto::{MovieListResponse, StatusMessage};
use crate::error::ApiError;
use crate::params::{parse_list_params, parse_object_id};
use crate::state::AppState;

/// GET /api/movie?page=&pageSize=&query=
///
/// A non-empty `query` turns the listing into a search.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let params = parse_list_params(&pairs)?;

    let (movies, total) = match params.query.as_deref() {
        Some(query) if !query.is_empty() => {
            state.movie_service.search(query, params.page).await?
        }
        _ => state.movie_service.list(params.page).await?,
    };
    let pagination = PageMeta::new(params.page, movies.len(), total);

    Ok(Json(MovieListResponse { movies, pagination }))
}

/// GET /api/movie/search?query=&page=
pub async fn search_movies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let params = parse_list_params(&pairs)?;
    let query = params.query.unwrap_or_default();

    let (movies, total) = state.movie_service.search(&query, params.page).await?;
    let pagination = PageMeta::new(params.page, movies.len(), total);

    Ok(Json(MovieListResponse { movies, pagination }))
}

/// GET /api/movie/filter/tags?tags=a&tags=b&page=
pub async fn filter_movies_by_tags(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let params = parse_list_params(&pairs)?;
    if params.tags.is_empty() {
        return Err(AppError::validation("Missing tags").into());
    }

    let (movies, total) = state
        .movie_service
        .filter_by_tags(&params.tags, params.page)
        .await?;
    let pagination = PageMeta::new(params.page, movies.len(), total);

    Ok(Json(MovieListResponse { movies, pagination }))
}

/// GET /api/movie/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_object_id(&id, "Invalid movie id")?;

    let movie = state
        .movie_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie not found"))?;

    Ok(Json(movie))
}

/// POST /api/movie
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(request) = body.map_err(|_| AppError::validation("Invalid request body"))?;

    let movie = state.movie_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movie/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateMovieRequest>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_object_id(&id, "Invalid movie id")?;
    let Json(request) = body.map_err(|_| AppError::validation("Invalid request body"))?;

    let movie = state.movie_service.update(id, &request).await?;
    Ok(Json(movie))
}

/// DELETE /api/movie/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, ApiError> {
    let id = parse_object_id(&id, "Invalid movie id")?;

    state.movie_service.delete(id).await?;

    Ok(Json(StatusMessage {
        code: StatusCode::OK.as_u16(),
        message: "Movie deleted successfully".to_string(),
    }))
}
