//! Handlers for the `/api/jokes` resource.
//!
//! Path and body rejections are taken as `Result`s and converted into
//! [`AppError`] so every failure leaves with the JSON error body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jokes_core::error::CoreError;
use jokes_core::joke::{JokePayload, JOKE_ENTITY};
use jokes_core::types::DbId;
use jokes_db::models::joke::Joke;
use jokes_db::repositories::JokeRepo;

use crate::error::{AppError, AppResult};
use crate::routes::JOKES_PATH;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: JOKE_ENTITY,
        id,
    })
}

/// GET /api/jokes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Joke>>> {
    let jokes = JokeRepo::list(&state.pool).await?;
    Ok(Json(jokes))
}

/// GET /api/jokes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Joke>> {
    let Path(id) = id?;
    let joke = JokeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(joke))
}

/// POST /api/jokes
///
/// Any `id` in the body is ignored. Responds 201 with the stored row and a
/// `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<JokePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let text = payload.into_text()?;

    let joke = JokeRepo::create(&state.pool, &text).await?;
    tracing::debug!(id = joke.id, "Joke created");

    let location = format!("{JOKES_PATH}/{}", joke.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(joke)))
}

/// PUT /api/jokes/{id}
///
/// Full replace. The body id must equal the route id.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<JokePayload>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let text = payload.into_text_for(id)?;

    if JokeRepo::replace(&state.pool, id, &text).await? {
        tracing::debug!(id, "Joke replaced");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// DELETE /api/jokes/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    if JokeRepo::delete(&state.pool, id).await? {
        tracing::debug!(id, "Joke deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
