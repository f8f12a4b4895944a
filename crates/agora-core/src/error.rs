//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures raised before any store access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// The named entity (`"Post"`, `"Comment"`, `"Like"`) does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
