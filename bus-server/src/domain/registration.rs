//! Validated registration fields.
//!
//! Every type here enforces its invariants at construction time, so a
//! registration that reaches the store is known to be well-formed.

use std::fmt;

use super::error::DomainError;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const PHONE_MIN: usize = 10;
const PHONE_MAX: usize = 20;
const COURSE_MAX: usize = 100;

/// A person's name, 2-100 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Parse a name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&len) {
            return Err(DomainError::InvalidName {
                min: NAME_MIN,
                max: NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address, stored lowercase.
///
/// # Examples
///
/// ```
/// use bus_server::domain::Email;
///
/// let email = Email::parse("  Asha@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "asha@example.com");
///
/// assert!(Email::parse("no-at-sign").is_err());
/// assert!(Email::parse("a@localhost").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse an email address.
    ///
    /// Requires exactly one `@`, a non-empty local part, and a dotted domain
    /// with no empty labels.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidEmail("must not contain whitespace"));
        }

        let mut parts = trimmed.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::InvalidEmail("must contain exactly one @"));
        };

        if local.is_empty() {
            return Err(DomainError::InvalidEmail("missing local part"));
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(DomainError::InvalidEmail("domain must be dotted, e.g. example.com"));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number: 10-20 characters of digits and `+ - ( )` or spaces,
/// with at least 10 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if !(PHONE_MIN..=PHONE_MAX).contains(&len) {
            return Err(DomainError::InvalidPhone("must be 10 to 20 characters"));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
        {
            return Err(DomainError::InvalidPhone("unexpected character"));
        }

        let digits = trimmed.chars().filter(char::is_ascii_digit).count();
        if digits < PHONE_MIN {
            return Err(DomainError::InvalidPhone("too few digits"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The name of a course being signed up for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseName(String);

impl CourseName {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCourse("must not be empty"));
        }
        if trimmed.chars().count() > COURSE_MAX {
            return Err(DomainError::InvalidCourse("must be at most 100 characters"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })*
    };
}

impl_display!(PersonName, Email, Phone, CourseName);
