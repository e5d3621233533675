//! Startup seeding.
//!
//! Brings the schema up to date and, when the `jokes` table is empty,
//! inserts a fixed set of sample jokes. Safe to run on every start.

use crate::repositories::JokeRepo;
use crate::{run_migrations, DbError, DbPool};

/// Question/answer pairs inserted into an empty store.
pub const SAMPLE_JOKES: [(&str, &str); 3] = [
    (
        "Why do programmers prefer dark mode?",
        "Because light attracts bugs!",
    ),
    (
        "How many programmers does it take to change a light bulb?",
        "None, that's a hardware problem.",
    ),
    (
        "What's a programmer's favorite place to hang out?",
        "The Foo Bar.",
    ),
];

/// What [`seed_jokes`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already had rows; nothing was written.
    AlreadySeeded,
    /// The table was empty and `inserted` sample rows were added.
    Seeded { inserted: usize },
}

/// Migrate, then insert [`SAMPLE_JOKES`] if the table is empty.
///
/// The sample rows go in as one transaction, so a failure leaves the
/// table empty and the next start tries again.
pub async fn seed_jokes(pool: &DbPool) -> Result<SeedOutcome, DbError> {
    run_migrations(pool).await?;
    tracing::debug!("Migrations up to date");

    if JokeRepo::any(pool).await? {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut tx = pool.begin().await?;
    for (question, answer) in SAMPLE_JOKES {
        sqlx::query("INSERT INTO jokes (joke_question, joke_answer) VALUES ($1, $2)")
            .bind(question)
            .bind(answer)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(SeedOutcome::Seeded {
        inserted: SAMPLE_JOKES.len(),
    })
}
