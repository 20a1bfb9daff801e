use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::error::ApiError;
use super::api::{frequency, intensity};
use super::api_doc::ApiDoc;
use super::config::Config;

pub fn router() -> Router {
    Router::new()
        // Calculation endpoints
        .route("/calculate-frequency", get(frequency::calculate_frequency))
        .route("/calculate-intensity", get(intensity::calculate_intensity))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(unknown_route)
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router().layer(cors).layer(TraceLayer::new_for_http());

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
