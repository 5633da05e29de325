//! Registration error types.

use crate::domain::{DomainError, Email};

/// Errors that can occur when registering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A submitted field failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The email address already has a user registration
    #[error("email already registered: {0}")]
    DuplicateEmail(Email),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RegistrationError::DuplicateEmail(Email::parse("a@b.in").unwrap());
        assert_eq!(err.to_string(), "email already registered: a@b.in");

        let err = RegistrationError::from(DomainError::InvalidPhone("too few digits"));
        assert_eq!(err.to_string(), "invalid phone number: too few digits");
    }
}
