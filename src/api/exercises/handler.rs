// Exercise endpoint handlers

use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::IntoParams;

use super::dataset;
use crate::models::exercise::Exercise;
use crate::models::response::ApiResponse;
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::extract::{Path, Query};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of records to skip
    pub offset: Option<usize>,
    /// Page size, capped at 100
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring matched against name, target, body part
    /// and equipment
    pub q: Option<String>,
}

/// Paginated listing of the exercise catalog
#[utoipa::path(
    get,
    path = "/api/v1/exercises",
    tag = "exercises",
    params(ListParams),
    responses(
        (status = 200, description = "A page of exercises", body = crate::models::response::ResponseEnvelope)
    )
)]
pub async fn list_exercises(Query(params): Query<ListParams>) -> ApiResult<ApiResponse> {
    let all: &[Exercise] = dataset::all()?;

    let offset: usize = params.offset.unwrap_or(0);
    let limit: usize = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let page: Vec<&Exercise> = all.iter().skip(offset).take(limit).collect();

    Ok(ApiResponse::new(StatusCode::OK)
        .message("Exercises fetched successfully")
        .data(json!({
            "exercises": page,
            "total": all.len(),
            "offset": offset,
            "limit": limit,
        })))
}

/// Substring search over the exercise catalog
#[utoipa::path(
    get,
    path = "/api/v1/exercises/search",
    tag = "exercises",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching exercises", body = crate::models::response::ResponseEnvelope),
        (status = 400, description = "Missing or empty search query", body = crate::models::response::ResponseEnvelope)
    )
)]
pub async fn search_exercises(Query(params): Query<SearchParams>) -> ApiResult<ApiResponse> {
    let query: String = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required query parameter 'q'".to_string()))?
        .to_lowercase();

    let matches: Vec<&Exercise> = dataset::all()?
        .iter()
        .filter(|exercise| {
            exercise.name.to_lowercase().contains(&query)
                || exercise.target.to_lowercase().contains(&query)
                || exercise.body_part.to_lowercase().contains(&query)
                || exercise.equipment.to_lowercase().contains(&query)
        })
        .collect();

    let total: usize = matches.len();
    info!(query = %query, hits = total, "Exercise search executed");

    Ok(ApiResponse::new(StatusCode::OK)
        .message("Search completed successfully")
        .data(json!({
            "exercises": matches,
            "total": total,
        })))
}

/// Single exercise lookup by id
#[utoipa::path(
    get,
    path = "/api/v1/exercises/{id}",
    tag = "exercises",
    params(("id" = String, Path, description = "Exercise identifier, e.g. 0001")),
    responses(
        (status = 200, description = "The requested exercise", body = crate::models::response::ResponseEnvelope),
        (status = 404, description = "No exercise with that id", body = crate::models::response::ResponseEnvelope)
    )
)]
pub async fn get_exercise(Path(id): Path<String>) -> ApiResult<ApiResponse> {
    let exercise: &Exercise = dataset::all()?
        .iter()
        .find(|exercise| exercise.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Exercise with id '{id}' not found")))?;

    Ok(ApiResponse::new(StatusCode::OK)
        .message("Exercise fetched successfully")
        .data(json!({ "exercise": exercise })))
}
