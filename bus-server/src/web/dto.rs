//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::RouteRecord;

/// Query string for bus search.
#[derive(Debug, Deserialize)]
pub struct BusSearchRequest {
    /// Free-text route query
    pub q: Option<String>,
}

/// A matched bus route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusResponse {
    /// Route display name
    pub route: String,

    /// Departure times as stored
    pub departure_times: Vec<String>,

    /// Vehicle class
    pub bus_type: String,

    /// Departure times on the 12-hour clock
    #[serde(default)]
    pub formatted_times: Vec<String>,
}

impl From<RouteRecord> for BusResponse {
    fn from(record: RouteRecord) -> Self {
        Self {
            route: record.route,
            departure_times: record.departure_times,
            bus_type: record.bus_type,
            formatted_times: record.formatted_times,
        }
    }
}

/// User registration form.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Course registration form.
#[derive(Debug, Deserialize)]
pub struct CourseRegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
}

/// Error message carried back to a form page after a failed submission.
#[derive(Debug, Default, Deserialize)]
pub struct FormErrorQuery {
    pub error: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_response_from_record() {
        let record = RouteRecord::new("Hyderabad to Tirupati", vec!["6:00".into()], "AC Sleeper")
            .with_formatted_times();
        let response = BusResponse::from(record);

        assert_eq!(response.route, "Hyderabad to Tirupati");
        assert_eq!(response.departure_times, ["6:00"]);
        assert_eq!(response.formatted_times, ["6:00 AM"]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "route": "Hyderabad to Tirupati",
                "departure_times": ["6:00"],
                "bus_type": "AC Sleeper",
                "formatted_times": ["6:00 AM"],
            })
        );
    }
}
