use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /v1 handler - Logs through factory-acquired loggers
///
/// The controller and its service each emit one record per level, tagged
/// with the name their logger was created under.
#[utoipa::path(
    get,
    path = routes::FACTORY,
    responses(
        (status = 200, description = "Records emitted", body = String, content_type = "text/plain")
    ),
    tag = "logging"
)]
pub async fn factory_handler(State(state): State<AppState>) -> &'static str {
    state.factory.save()
}
