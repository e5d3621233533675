//! Joke request payload and its validated form.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{field_violations, require};

/// Entity name used in not-found errors.
pub const JOKE_ENTITY: &str = "Joke";

/// Body accepted by the create and update endpoints.
///
/// Text fields are optional at the serde level so a missing field surfaces
/// as a field violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JokePayload {
    /// Ignored on create; must equal the route id on update.
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub joke_question: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub joke_answer: Option<String>,
}

/// A question/answer pair that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeText {
    pub question: String,
    pub answer: String,
}

impl JokeText {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl JokePayload {
    /// Run field validation and return the validated text pair.
    ///
    /// Presence is checked here while the pair is taken apart; the derived
    /// rules cover content. A rejection always names at least one field.
    pub fn into_text(self) -> Result<JokeText, CoreError> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_violations(&errors),
        };

        let question = require(self.joke_question, "jokeQuestion", &mut violations);
        let answer = require(self.joke_answer, "jokeAnswer", &mut violations);

        match (question, answer) {
            (Some(question), Some(answer)) if violations.is_empty() => {
                Ok(JokeText { question, answer })
            }
            _ => {
                violations.sort_by(|a, b| a.field.cmp(&b.field));
                Err(CoreError::InvalidFields(violations))
            }
        }
    }

    /// Validate an update body against the id taken from the route.
    ///
    /// The id check comes first: a mismatched body is rejected even when
    /// its text fields are also invalid.
    pub fn into_text_for(self, route_id: DbId) -> Result<JokeText, CoreError> {
        if self.id != Some(route_id) {
            return Err(CoreError::IdMismatch {
                route_id,
                body_id: self.id,
            });
        }
        self.into_text()
    }
}
