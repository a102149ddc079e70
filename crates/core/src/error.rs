use crate::types::DbId;
use crate::validation::FieldIssue;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Input failed one or more field-level rules.
    #[error("Validation failed: {message} ({} field issue(s))", issues.len())]
    InvalidFields {
        message: String,
        issues: Vec<FieldIssue>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
