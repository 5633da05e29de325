//! HTTP route handlers.

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::registrations::{NewCourseRegistration, NewUser, RegistrationError};
use crate::source::SourceError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/buses", get(search_buses))
        .route("/register", get(registration_form).post(handle_registration))
        .route("/success", get(success_page))
        .route("/courses", get(courses_page))
        .route(
            "/course-register",
            get(course_registration_form).post(handle_course_registration),
        )
        .route("/success-course", get(course_success_page))
        .route("/admin/registrations", get(admin_registrations))
        .route("/admin/course-registrations", get(admin_course_registrations))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Render a template to an HTML response.
fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

/// Redirect back to a form page with a message to show.
fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?error={}", urlencoding::encode(message)))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page with the search box.
async fn index_page() -> Result<Html<String>, AppError> {
    render(&IndexTemplate)
}

/// Search buses by route name, tolerating shorthand and typos.
async fn search_buses(
    State(state): State<AppState>,
    Query(req): Query<BusSearchRequest>,
) -> Result<Json<Vec<BusResponse>>, AppError> {
    let query = req.q.ok_or_else(|| AppError::BadRequest {
        message: "missing query parameter: q".to_string(),
    })?;

    // Loading reads the data file, so keep it off the async workers
    let source = Arc::clone(&state.routes);
    let matcher = Arc::clone(&state.matcher);
    let results = tokio::task::spawn_blocking(move || matcher.search_source(&query, &*source))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("search task failed: {e}"),
        })??;

    info!(results = results.len(), "bus search");
    Ok(Json(results.into_iter().map(BusResponse::from).collect()))
}

/// User registration form.
async fn registration_form(
    Query(query): Query<FormErrorQuery>,
) -> Result<Html<String>, AppError> {
    render(&RegisterTemplate { error: query.error })
}

/// Register a user, then redirect to the confirmation page.
///
/// Validation failures and duplicate emails go back to the form with a
/// message.
async fn handle_registration(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Redirect {
    let user = match NewUser::parse(&form.name, &form.email, &form.phone) {
        Ok(user) => user,
        Err(e) => {
            warn!("rejected registration: {e}");
            return redirect_with_error("/register", &e.to_string());
        }
    };

    match state.registrations.register_user(user).await {
        Ok(_) => Redirect::to("/success"),
        Err(RegistrationError::DuplicateEmail(_)) => {
            redirect_with_error("/register", "Email already registered")
        }
        Err(e) => redirect_with_error("/register", &e.to_string()),
    }
}

/// Registration confirmation.
async fn success_page() -> Result<Html<String>, AppError> {
    render(&SuccessTemplate)
}

/// Course catalogue.
async fn courses_page() -> Result<Html<String>, AppError> {
    render(&CoursesTemplate {
        courses: COURSE_CATALOGUE,
    })
}

/// Course registration form.
async fn course_registration_form(
    Query(query): Query<FormErrorQuery>,
) -> Result<Html<String>, AppError> {
    render(&CourseRegisterTemplate {
        error: query.error,
        courses: COURSE_CATALOGUE,
    })
}

/// Register for a course, then redirect to the confirmation page.
async fn handle_course_registration(
    State(state): State<AppState>,
    Form(form): Form<CourseRegisterForm>,
) -> Redirect {
    match NewCourseRegistration::parse(&form.name, &form.email, &form.phone, &form.course) {
        Ok(reg) => {
            state.registrations.register_course(reg).await;
            Redirect::to("/success-course")
        }
        Err(e) => {
            warn!("rejected course registration: {e}");
            redirect_with_error("/course-register", &e.to_string())
        }
    }
}

/// Course registration confirmation.
async fn course_success_page() -> Result<Html<String>, AppError> {
    render(&CourseSuccessTemplate)
}

/// All user registrations, newest first.
async fn admin_registrations(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = state
        .registrations
        .users()
        .await
        .iter()
        .map(UserView::from_registration)
        .collect();
    render(&AdminUsersTemplate { users })
}

/// All course registrations, newest first.
async fn admin_course_registrations(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let registrations = state
        .registrations
        .course_registrations()
        .await
        .iter()
        .map(CourseRegistrationView::from_registration)
        .collect();
    render(&AdminCoursesTemplate { registrations })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        AppError::Unavailable {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use crate::domain::RouteRecord;
    use crate::matcher::RouteMatcher;
    use crate::registrations::RegistrationStore;
    use crate::source::{JsonFileSource, StaticSource};

    fn app_with(source: impl crate::source::RouteSource + 'static) -> Router {
        let state = AppState::new(
            Arc::new(source),
            RouteMatcher::default(),
            RegistrationStore::new(),
        );
        create_router(state, Path::new("static"))
    }

    fn app() -> Router {
        app_with(StaticSource::new(vec![
            RouteRecord::new(
                "Hyderabad to Tirupati",
                vec!["6:00".into(), "18:30".into()],
                "AC Sleeper",
            ),
            RouteRecord::new("Chennai to Bangalore", vec!["varies".into()], "Express"),
            RouteRecord::new("Tirupati Express", vec!["13:05".into()], "Express"),
        ]))
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// POST a form and return the status and `Location` header.
    async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (response.status(), location)
    }

    #[tokio::test]
    async fn health_check() {
        assert_eq!(get(&app(), "/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn bus_search_resolves_alias() {
        let (status, body) = get(&app(), "/api/buses?q=hyd").await;
        assert_eq!(status, StatusCode::OK);

        let buses: Vec<BusResponse> = serde_json::from_str(&body).unwrap();
        assert_eq!(buses.len(), 1);
        assert_eq!(buses[0].route, "Hyderabad to Tirupati");
        assert_eq!(buses[0].formatted_times, ["6:00 AM", "6:30 PM"]);
    }

    #[tokio::test]
    async fn bus_search_normalizes_query() {
        let (status, body) = get(&app(), "/api/buses?q=%20%20TPT%20").await;
        assert_eq!(status, StatusCode::OK);
        let buses: Vec<BusResponse> = serde_json::from_str(&body).unwrap();
        assert_eq!(buses.len(), 1);
        assert_eq!(buses[0].route, "Tirupati Express");
        assert_eq!(buses[0].formatted_times, ["1:05 PM"]);
    }

    #[tokio::test]
    async fn bus_search_no_match_is_empty_list() {
        let (status, body) = get(&app(), "/api/buses?q=xyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");

        let (status, body) = get(&app(), "/api/buses?q=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn bus_search_requires_query() {
        let (status, body) = get(&app(), "/api/buses").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("missing query parameter"));
    }

    #[tokio::test]
    async fn bus_search_unavailable_data() {
        let app = app_with(JsonFileSource::new("/nonexistent/bus_timings.json"));
        let (status, body) = get(&app, "/api/buses?q=tpt").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("failed to read route data"));
    }

    #[tokio::test]
    async fn pages_render() {
        let app = app();
        for (uri, needle) in [
            ("/", "Find your bus"),
            ("/register", "Register for bus alerts"),
            ("/success", "Thank you for registering"),
            ("/courses", "Spoken English"),
            ("/course-register", "Course registration"),
            ("/success-course", "signed up"),
        ] {
            let (status, body) = get(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(needle), "{uri} should contain {needle:?}");
        }
    }

    #[tokio::test]
    async fn register_then_list() {
        let app = app();
        let (status, location) = post_form(
            &app,
            "/register",
            "name=Asha&email=asha%40example.com&phone=9876543210",
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/success");

        let (_, body) = get(&app, "/admin/registrations").await;
        assert!(body.contains("asha@example.com"));
        assert!(body.contains("Asha"));
    }

    #[tokio::test]
    async fn duplicate_email_redirects_with_error() {
        let app = app();
        let form = "name=Asha&email=asha%40example.com&phone=9876543210";
        post_form(&app, "/register", form).await;

        let (status, location) = post_form(&app, "/register", form).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/register?error=Email%20already%20registered");

        let (_, body) = get(&app, &location).await;
        assert!(body.contains("Email already registered"));
    }

    #[tokio::test]
    async fn invalid_registration_redirects_with_error() {
        let (status, location) = post_form(
            &app(),
            "/register",
            "name=Asha&email=asha%40example.com&phone=123",
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert!(location.starts_with("/register?error=invalid%20phone%20number"));
    }

    #[tokio::test]
    async fn course_registration_flow() {
        let app = app();
        let (status, location) = post_form(
            &app,
            "/course-register",
            "name=Ravi&email=ravi%40example.com&phone=%2B91%2098765%2043210&course=Computer+Basics",
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/success-course");

        let (_, body) = get(&app, "/admin/course-registrations").await;
        assert!(body.contains("Computer Basics"));
        assert!(body.contains("ravi@example.com"));
    }

    #[tokio::test]
    async fn invalid_course_registration() {
        let (status, location) = post_form(
            &app(),
            "/course-register",
            "name=Ravi&email=ravi%40example.com&phone=9876543210&course=",
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert!(location.starts_with("/course-register?error="));
    }

    #[tokio::test]
    async fn admin_pages_start_empty() {
        let app = app();
        for uri in ["/admin/registrations", "/admin/course-registrations"] {
            let (status, body) = get(&app, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("No registrations yet"));
        }
    }
}
