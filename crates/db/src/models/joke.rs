//! Joke entity model.

use jokes_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `jokes` table.
///
/// Serializes as `{ "id", "jokeQuestion", "jokeAnswer" }`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    pub id: DbId,
    pub joke_question: String,
    pub joke_answer: String,
}
