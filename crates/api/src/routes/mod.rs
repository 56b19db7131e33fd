pub mod health;
pub mod validation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /validation/operators                            list operators (GET)
/// /validation/validate                             evaluate rules (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/validation", validation::validation_router())
}
