//! In-memory registration store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{CourseName, DomainError, Email, PersonName, Phone};

use super::error::RegistrationError;

/// A validated user sign-up, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
}

impl NewUser {
    /// Validate raw form fields.
    pub fn parse(name: &str, email: &str, phone: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: PersonName::parse(name)?,
            email: Email::parse(email)?,
            phone: Phone::parse(phone)?,
        })
    }
}

/// A validated course sign-up, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourseRegistration {
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub course: CourseName,
}

impl NewCourseRegistration {
    /// Validate raw form fields.
    pub fn parse(name: &str, email: &str, phone: &str, course: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: PersonName::parse(name)?,
            email: Email::parse(email)?,
            phone: Phone::parse(phone)?,
            course: CourseName::parse(course)?,
        })
    }
}

/// A stored user registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistration {
    pub id: u64,
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub created_at: DateTime<Utc>,
}

/// A stored course registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRegistration {
    pub id: u64,
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub course: CourseName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRegistration>,
    courses: Vec<CourseRegistration>,
}

/// Thread-safe registration store.
///
/// Cloning shares the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct RegistrationStore {
    inner: Arc<RwLock<Tables>>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    ///
    /// Each email address may register once. Emails are stored lowercase,
    /// so the check ignores case.
    pub async fn register_user(&self, user: NewUser) -> Result<UserRegistration, RegistrationError> {
        let mut tables = self.inner.write().await;

        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(RegistrationError::DuplicateEmail(user.email));
        }

        let registration = UserRegistration {
            id: tables.users.len() as u64 + 1,
            name: user.name,
            email: user.email,
            phone: user.phone,
            created_at: Utc::now(),
        };
        tables.users.push(registration.clone());

        info!(id = registration.id, "user registered");
        Ok(registration)
    }

    /// Register someone for a course.
    ///
    /// The same person may sign up for any number of courses.
    pub async fn register_course(&self, reg: NewCourseRegistration) -> CourseRegistration {
        let mut tables = self.inner.write().await;

        let registration = CourseRegistration {
            id: tables.courses.len() as u64 + 1,
            name: reg.name,
            email: reg.email,
            phone: reg.phone,
            course: reg.course,
            created_at: Utc::now(),
        };
        tables.courses.push(registration.clone());

        info!(id = registration.id, course = %registration.course, "course registration");
        registration
    }

    /// All user registrations, newest first.
    pub async fn users(&self) -> Vec<UserRegistration> {
        let tables = self.inner.read().await;
        tables.users.iter().rev().cloned().collect()
    }

    /// All course registrations, newest first.
    pub async fn course_registrations(&self) -> Vec<CourseRegistration> {
        let tables = self.inner.read().await;
        tables.courses.iter().rev().cloned().collect()
    }
}
