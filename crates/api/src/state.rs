use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, passed to every repository call.
    pub pool: jokes_db::DbPool,
    /// Read by the router for CORS origins and the request timeout.
    pub config: Arc<ServerConfig>,
}
