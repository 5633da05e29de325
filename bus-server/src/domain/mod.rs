//! Domain types for the bus agent.
//!
//! Route records and departure time formatting for the timetable, plus the
//! validated field types used by user and course registration.

mod error;
mod registration;
mod route;
mod time;

pub use error::DomainError;
pub use registration::{CourseName, Email, PersonName, Phone};
pub use route::RouteRecord;
pub use time::{DepartureTime, Period, TimeError, format_departure};
