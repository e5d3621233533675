//! Liveness and schema status, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use jokes_db::repositories::JokeRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the schema is current, `"degraded"` while migrations are pending.
    pub status: &'static str,
    pub version: &'static str,
    pub pending_migrations: usize,
    /// Row count of the jokes table; absent until the schema exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jokes: Option<i64>,
}

/// GET /health
///
/// 503 when the database does not answer; otherwise 200 with the report.
async fn report(State(state): State<AppState>) -> AppResult<Json<HealthReport>> {
    jokes_db::health_check(&state.pool)
        .await
        .map_err(|err| AppError::Unavailable(err.to_string()))?;

    let pending_migrations = jokes_db::pending_migrations(&state.pool).await?;
    let jokes = if pending_migrations == 0 {
        Some(JokeRepo::count(&state.pool).await?)
    } else {
        None
    };

    Ok(Json(HealthReport {
        status: if pending_migrations == 0 { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        pending_migrations,
        jokes,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
