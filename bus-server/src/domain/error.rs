//! Domain error types.
//!
//! These errors represent validation failures for user-submitted data.
//! They are distinct from data source and IO errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Name is too short or too long
    #[error("name must be between {min} and {max} characters")]
    InvalidName { min: usize, max: usize },

    /// Email address is malformed
    #[error("invalid email address: {0}")]
    InvalidEmail(&'static str),

    /// Phone number is malformed
    #[error("invalid phone number: {0}")]
    InvalidPhone(&'static str),

    /// Course name is empty or too long
    #[error("invalid course: {0}")]
    InvalidCourse(&'static str),
}
