//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::StudentId;

/// Domain errors represent grading rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid grade: {value} (must be between 0 and 100)")]
    GradeOutOfRange { value: i32 },

    #[error("student already enrolled: {0}")]
    DuplicateStudent(StudentId),

    #[error("student not found: {0}")]
    UnknownStudent(StudentId),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
