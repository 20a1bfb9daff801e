use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::frequency::FrequencyResponse;
use super::api::intensity::IntensityResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::frequency::calculate_frequency,
        super::api::intensity::calculate_intensity,
    ),
    components(
        schemas(
            FrequencyResponse,
            IntensityResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "Wavecalc API",
        description = "Doppler shift and wave intensity calculations",
        version = "0.1.0"
    ),
    tags(
        (name = "calculate", description = "Wave calculations")
    )
)]
pub struct ApiDoc;
