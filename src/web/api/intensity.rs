use axum::{extract::Query, Json};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::acoustics::intensity;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::api::params::require_f64;

#[derive(Debug, Serialize, ToSchema)]
pub struct IntensityResponse {
    pub intensity: f64,
}

#[utoipa::path(
    get,
    path = "/calculate-intensity",
    tag = "calculate",
    params(
        ("sourcePower" = f64, Query, description = "Source power (W)"),
        ("distance" = f64, Query, description = "Radial distance from the source (m); values below 0.01 are clamped")
    ),
    responses(
        (status = 200, description = "Wave intensity", body = IntensityResponse),
        (status = 400, description = "Missing or non-numeric parameter", body = ErrorResponse)
    )
)]
pub async fn calculate_intensity(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<IntensityResponse>> {
    let source_power = require_f64(&params, "sourcePower")?;
    let distance = require_f64(&params, "distance")?;

    Ok(Json(IntensityResponse {
        intensity: intensity::cylindrical_intensity(source_power, distance),
    }))
}
