//! Bus route records.

use serde::{Deserialize, Serialize};

use super::time::format_departure;

/// One bus route's schedule, as stored in the timetable.
///
/// `formatted_times` is empty in stored data. It is only filled in on
/// records returned from a search, where it mirrors `departure_times`
/// entry for entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Display name, e.g. "Hyderabad to Tirupati"
    pub route: String,

    /// Departure times, nominally 24-hour "HH:MM"
    pub departure_times: Vec<String>,

    /// Vehicle class, e.g. "AC Sleeper"
    pub bus_type: String,

    /// Display form of `departure_times`
    #[serde(default)]
    pub formatted_times: Vec<String>,
}

impl RouteRecord {
    /// Create a record with no formatted times.
    pub fn new(
        route: impl Into<String>,
        departure_times: Vec<String>,
        bus_type: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            departure_times,
            bus_type: bus_type.into(),
            formatted_times: Vec::new(),
        }
    }

    /// The route name as compared by search.
    pub fn match_key(&self) -> String {
        self.route.to_lowercase()
    }

    /// Return a copy of this record with `formatted_times` computed.
    pub fn with_formatted_times(&self) -> Self {
        Self {
            formatted_times: self
                .departure_times
                .iter()
                .map(|t| format_departure(t))
                .collect(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RouteRecord {
        RouteRecord::new(
            "Hyderabad to Tirupati",
            vec!["6:00".into(), "varies".into(), "18:30".into()],
            "AC Sleeper",
        )
    }

    #[test]
    fn formatted_times_mirror_departures() {
        let formatted = record().with_formatted_times();
        assert_eq!(formatted.formatted_times, ["6:00 AM", "varies", "6:30 PM"]);
        assert_eq!(
            formatted.formatted_times.len(),
            formatted.departure_times.len()
        );
    }

    #[test]
    fn formatting_leaves_original_untouched() {
        let original = record();
        let _ = original.with_formatted_times();
        assert!(original.formatted_times.is_empty());
    }

    #[test]
    fn match_key_is_lowercase() {
        assert_eq!(record().match_key(), "hyderabad to tirupati");
    }

    #[test]
    fn deserialize_without_formatted_times() {
        let json = r#"{"route":"Chennai to Bangalore","departure_times":["07:15"],"bus_type":"Express"}"#;
        let record: RouteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.route, "Chennai to Bangalore");
        assert_eq!(record.departure_times, ["07:15"]);
        assert!(record.formatted_times.is_empty());
    }

    #[test]
    fn serialize_includes_formatted_times() {
        let json = serde_json::to_value(record().with_formatted_times()).unwrap();
        assert_eq!(json["bus_type"], "AC Sleeper");
        assert_eq!(json["formatted_times"][0], "6:00 AM");
    }
}
