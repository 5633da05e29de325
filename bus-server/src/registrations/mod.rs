//! User and course registrations.
//!
//! Sign-ups are validated by the domain types before they get here. The
//! store keeps them in memory for the lifetime of the process.

mod error;
mod store;

pub use error::RegistrationError;
pub use store::{
    CourseRegistration, NewCourseRegistration, NewUser, RegistrationStore, UserRegistration,
};
