//! Repository for the `jokes` table.

use jokes_core::joke::JokeText;
use jokes_core::types::DbId;
use sqlx::PgPool;

use crate::models::joke::Joke;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, joke_question, joke_answer";

/// Provides CRUD operations for jokes.
pub struct JokeRepo;

impl JokeRepo {
    /// Insert a new joke, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &JokeText) -> Result<Joke, sqlx::Error> {
        let query = format!(
            "INSERT INTO jokes (joke_question, joke_answer)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Joke>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_one(pool)
            .await
    }

    /// Find a joke by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Joke>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jokes WHERE id = $1");
        sqlx::query_as::<_, Joke>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all jokes in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Joke>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jokes ORDER BY id");
        sqlx::query_as::<_, Joke>(&query).fetch_all(pool).await
    }

    /// Whether a row with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jokes WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether the table holds at least one row.
    pub async fn any(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jokes)")
            .fetch_one(pool)
            .await
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jokes")
            .fetch_one(pool)
            .await
    }

    /// Overwrite both text fields of an existing joke.
    ///
    /// Check-then-act: the existence check and the update are separate
    /// statements with no enclosing transaction. A row removed in between
    /// makes the update touch nothing, which is reported as `false`.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn replace(pool: &PgPool, id: DbId, input: &JokeText) -> Result<bool, sqlx::Error> {
        if !Self::exists(pool, id).await? {
            return Ok(false);
        }

        let result =
            sqlx::query("UPDATE jokes SET joke_question = $2, joke_answer = $3 WHERE id = $1")
                .bind(id)
                .bind(&input.question)
                .bind(&input.answer)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a joke. Returns `true` if a row was removed.
    ///
    /// Same check-then-act shape as [`JokeRepo::replace`].
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        if !Self::exists(pool, id).await? {
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM jokes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
