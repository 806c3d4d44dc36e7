use std::collections::BTreeSet;

use axum::http::StatusCode;
use serde_json::json;

use crate::api::exercises::dataset;
use crate::models::response::ApiResponse;
use crate::utils::error::ApiResult;

/// Distinct target muscles present in the exercise catalog, sorted
#[utoipa::path(
    get,
    path = "/api/v1/muscles",
    tag = "muscles",
    responses(
        (status = 200, description = "Sorted list of target muscles", body = crate::models::response::ResponseEnvelope)
    )
)]
pub async fn list_muscles() -> ApiResult<ApiResponse> {
    let muscles: BTreeSet<&str> = dataset::all()?
        .iter()
        .map(|exercise| exercise.target.as_str())
        .collect();

    let total: usize = muscles.len();

    Ok(ApiResponse::new(StatusCode::OK)
        .message("Target muscles fetched successfully")
        .data(json!({
            "muscles": muscles,
            "total": total,
        })))
}
