use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed on {} field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    /// The id in the request path disagrees with the id in the body.
    #[error("Route id {route_id} does not match payload id {body_id:?}")]
    IdMismatch {
        route_id: DbId,
        body_id: Option<DbId>,
    },
}
