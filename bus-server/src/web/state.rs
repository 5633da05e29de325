//! Application state for the web layer.

use std::sync::Arc;

use crate::matcher::RouteMatcher;
use crate::registrations::RegistrationStore;
use crate::source::RouteSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Where route records come from
    pub routes: Arc<dyn RouteSource>,

    /// Route search
    pub matcher: Arc<RouteMatcher>,

    /// User and course sign-ups
    pub registrations: RegistrationStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        routes: Arc<dyn RouteSource>,
        matcher: RouteMatcher,
        registrations: RegistrationStore,
    ) -> Self {
        Self {
            routes,
            matcher: Arc::new(matcher),
            registrations,
        }
    }
}
