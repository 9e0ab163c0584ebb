use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /v2 handler - Logs through the plain `tracing` macros
///
/// Same output shape as `/v1`; records are attributed by module target and
/// component span instead of a held logger.
#[utoipa::path(
    get,
    path = routes::DERIVED,
    responses(
        (status = 200, description = "Records emitted", body = String, content_type = "text/plain")
    ),
    tag = "logging"
)]
pub async fn derived_handler(State(state): State<AppState>) -> &'static str {
    state.derived.save()
}
