pub mod health;
pub mod joke;

use axum::Router;

use crate::state::AppState;

/// Public path of the jokes collection, used for `Location` headers.
pub const JOKES_PATH: &str = "/api/jokes";

/// Build the `/api` route tree.
///
/// ```text
/// /jokes            list, create
/// /jokes/{id}       get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/jokes", joke::router())
}
