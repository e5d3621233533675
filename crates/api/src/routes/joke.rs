//! Route definitions for the `/jokes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::joke;
use crate::state::AppState;

/// Routes mounted at `/jokes`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(joke::list).post(joke::create))
        .route(
            "/{id}",
            get(joke::get_by_id)
                .put(joke::update)
                .delete(joke::delete),
        )
}
