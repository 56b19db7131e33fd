//! Route definitions for the `/validation` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// Routes mounted at `/validation`.
///
/// ```text
/// GET    /operators    -> list_operators
/// POST   /validate     -> validate
/// ```
pub fn validation_router() -> Router<AppState> {
    Router::new()
        .route("/operators", get(validation::list_operators))
        .route("/validate", post(validation::validate))
}
