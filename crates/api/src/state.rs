use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bus that carries run records to the persistence task.
    pub event_bus: Arc<rulecheck_events::EventBus>,
    /// Run-history database, `None` when history is disabled.
    pub pool: Option<rulecheck_db::DbPool>,
}
