//! Performance CRUD and query handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use playbill_core::error::AppError;
use playbill_core::types::pagination::PageMeta;
use playbill_entity::performance::{
    CreatePerformanceRequest, Performance, UpdatePerformanceRequest,
};

use crate::dto::{PerformanceListResponse, StatusMessage};
use crate::error::ApiError;
use crate::params::{parse_list_params, parse_object_id};
use crate::state::AppState;

/// GET /api/performance?page=&pageSize=&query=
///
/// A non-empty `query` turns the listing into a search.
pub async fn list_performances(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PerformanceListResponse>, ApiError> {
    let params = parse_list_params(&pairs)?;

    let (performances, total) = match params.query.as_deref() {
        Some(query) if !query.is_empty() => {
            state
                .performance_service
                .search(query, params.page)
                .await?
        }
        _ => state.performance_service.list(params.page).await?,
    };
    let pagination = PageMeta::new(params.page, performances.len(), total);

    Ok(Json(PerformanceListResponse {
        performances,
        pagination,
    }))
}

/// GET /api/performance/search?query=&page=
pub async fn search_performances(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PerformanceListResponse>, ApiError> {
    let params = parse_list_params(&pairs)?;
    let query = params.query.unwrap_or_default();

    let (performances, total) = state
        .performance_service
        .search(&query, params.page)
        .await?;
    let pagination = PageMeta::new(params.page, performances.len(), total);

    Ok(Json(PerformanceListResponse {
        performances,
        pagination,
    }))
}

/// GET /api/performance/filter/tags?tags=a&tags=b&page=
pub async fn filter_performances_by_tags(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PerformanceListResponse>, ApiError> {
    let params = parse_list_params(&pairs)?;
    if params.tags.is_empty() {
        return Err(AppError::validation("Missing tags").into());
    }

    let (performances, total) = state
        .performance_service
        .filter_by_tags(&params.tags, params.page)
        .await?;
    let pagination = PageMeta::new(params.page, performances.len(), total);

    Ok(Json(PerformanceListResponse {
        performances,
        pagination,
    }))
}

/// GET /api/performance/{id}
pub async fn get_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Performance>, ApiError> {
    let id = parse_object_id(&id, "Invalid performance id")?;

    let performance = state
        .performance_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Performance not found"))?;

    Ok(Json(performance))
}

/// POST /api/performance
pub async fn create_performance(
    State(state): State<AppState>,
    body: Result<Json<CreatePerformanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Performance>), ApiError> {
    let Json(request) = body.map_err(|_| AppError::validation("Invalid request body"))?;

    let performance = state.performance_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(performance)))
}

/// PUT /api/performance/{id}
pub async fn update_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePerformanceRequest>, JsonRejection>,
) -> Result<Json<Performance>, ApiError> {
    let id = parse_object_id(&id, "Invalid performance id")?;
    let Json(request) = body.map_err(|_| AppError::validation("Invalid request body"))?;

    let performance = state.performance_service.update(id, &request).await?;
    Ok(Json(performance))
}

/// DELETE /api/performance/{id}
pub async fn delete_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, ApiError> {
    let id = parse_object_id(&id, "Invalid performance id")?;

    state.performance_service.delete(id).await?;

    Ok(Json(StatusMessage {
        code: StatusCode::OK.as_u16(),
        message: "Performance deleted successfully".to_string(),
    }))
}
