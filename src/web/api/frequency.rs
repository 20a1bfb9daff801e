use axum::{extract::Query, Json};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::acoustics::doppler;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::api::params::require_f64;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyResponse {
    pub observed_frequency: f64,
}

#[utoipa::path(
    get,
    path = "/calculate-frequency",
    tag = "calculate",
    params(
        ("sourceFrequency" = f64, Query, description = "Source frequency (Hz)"),
        ("sourceVelocity" = f64, Query, description = "Source velocity toward the observer (m/s)"),
        ("observerVelocity" = f64, Query, description = "Observer velocity toward the source (m/s)")
    ),
    responses(
        (status = 200, description = "Observed frequency", body = FrequencyResponse),
        (status = 400, description = "Missing or non-numeric parameter", body = ErrorResponse)
    )
)]
pub async fn calculate_frequency(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<FrequencyResponse>> {
    let source_frequency = require_f64(&params, "sourceFrequency")?;
    let source_velocity = require_f64(&params, "sourceVelocity")?;
    let observer_velocity = require_f64(&params, "observerVelocity")?;

    Ok(Json(FrequencyResponse {
        observed_frequency: doppler::observed_frequency(
            source_frequency,
            source_velocity,
            observer_velocity,
        ),
    }))
}
