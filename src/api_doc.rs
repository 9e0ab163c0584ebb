use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "log-practice API",
        version = "1.0.0",
        description = "Two equivalent ways of obtaining a logger behind minimal HTTP routes"
    ),
    paths(
        handlers::health::health_handler,
        handlers::factory::factory_handler,
        handlers::derived::derived_handler
    ),
    components(
        schemas(HealthResponse)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "logging", description = "Leveled logging demonstrations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
