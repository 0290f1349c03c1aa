//! Domain-level error types.

use thiserror::Error;

use crate::domain::ResourceKind;

/// Message returned whenever the policy or an ownership check rejects a request.
pub const NOT_AUTHORIZED: &str = "User is not authorized";

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{} is invalid", .kind.label())]
    InvalidIdentifier { kind: ResourceKind },

    #[error("No {kind} with that identifier has been found")]
    NotFound { kind: ResourceKind },

    #[error("User is not authorized")]
    Forbidden,
}

/// Field-level validation failures, raised before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} cannot be blank", field_label(.0))]
    RequiredField(&'static str),
}

fn field_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
