//! Askama templates for the web frontend.

use askama::Template;

use crate::registrations::{CourseRegistration, UserRegistration};

/// Courses offered on the course pages.
pub const COURSE_CATALOGUE: &[CourseView] = &[
    CourseView {
        name: "Spoken English",
        summary: "Everyday conversation, interviews and phone etiquette.",
        duration: "6 weeks",
    },
    CourseView {
        name: "Computer Basics",
        summary: "Typing, files, email and safe browsing.",
        duration: "4 weeks",
    },
    CourseView {
        name: "Tally and Accounting",
        summary: "Bookkeeping, GST entries and reports in Tally.",
        duration: "8 weeks",
    },
];

/// Display format for registration timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the bus search box.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// User registration form.
#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

/// Shown after a successful user registration.
#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate;

/// Course catalogue.
#[derive(Template)]
#[template(path = "courses.html")]
pub struct CoursesTemplate {
    pub courses: &'static [CourseView],
}

/// Course registration form.
#[derive(Template)]
#[template(path = "course_register.html")]
pub struct CourseRegisterTemplate {
    pub error: Option<String>,
    pub courses: &'static [CourseView],
}

/// Shown after a successful course registration.
#[derive(Template)]
#[template(path = "success_course.html")]
pub struct CourseSuccessTemplate;

/// Admin listing of user registrations.
#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminUsersTemplate {
    pub users: Vec<UserView>,
}

/// Admin listing of course registrations.
#[derive(Template)]
#[template(path = "admin_course.html")]
pub struct AdminCoursesTemplate {
    pub registrations: Vec<CourseRegistrationView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A course in the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct CourseView {
    pub name: &'static str,
    pub summary: &'static str,
    pub duration: &'static str,
}

/// User registration row.
#[derive(Debug, Clone)]
pub struct UserView {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registered: String,
}

impl UserView {
    pub fn from_registration(reg: &UserRegistration) -> Self {
        Self {
            id: reg.id,
            name: reg.name.to_string(),
            email: reg.email.to_string(),
            phone: reg.phone.to_string(),
            registered: reg.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Course registration row.
#[derive(Debug, Clone)]
pub struct CourseRegistrationView {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub registered: String,
}

impl CourseRegistrationView {
    pub fn from_registration(reg: &CourseRegistration) -> Self {
        Self {
            id: reg.id,
            name: reg.name.to_string(),
            email: reg.email.to_string(),
            phone: reg.phone.to_string(),
            course: reg.course.to_string(),
            registered: reg.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
