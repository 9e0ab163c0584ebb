use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api_doc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::FACTORY, get(handlers::factory_handler))
        .route(routes::DERIVED, get(handlers::derived_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::OPENAPI, get(api_doc::openapi_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
