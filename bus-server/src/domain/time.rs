//! Departure time handling.
//!
//! The timetable stores departures as 24-hour "H:MM" or "HH:MM" strings, but
//! upstream data is not always consistent. Anything that is not a valid clock
//! time is shown to the user exactly as it was written.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when a string is not a 24-hour departure time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A departure time of day, parsed from 24-hour notation.
///
/// Displays on the 12-hour clock with an AM/PM suffix.
///
/// # Examples
///
/// ```
/// use bus_server::domain::DepartureTime;
///
/// let t = DepartureTime::parse("18:30").unwrap();
/// assert_eq!(t.to_string(), "6:30 PM");
///
/// let t = DepartureTime::parse("0:05").unwrap();
/// assert_eq!(t.to_string(), "12:05 AM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Parse a time from "H:MM" or "HH:MM" 24-hour format.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::DepartureTime;
    ///
    /// assert!(DepartureTime::parse("6:00").is_ok());
    /// assert!(DepartureTime::parse("06:00").is_ok());
    /// assert!(DepartureTime::parse("23:59").is_ok());
    ///
    /// assert!(DepartureTime::parse("600").is_err());
    /// assert!(DepartureTime::parse("6:0").is_err());
    /// assert!(DepartureTime::parse("24:70").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected H:MM format"))?;

        if hour.is_empty() || hour.len() > 2 {
            return Err(TimeError::new("hour must be 1 or 2 digits"));
        }
        if minute.len() != 2 {
            return Err(TimeError::new("minute must be 2 digits"));
        }

        let hour = parse_digits(hour).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_digits(minute).ok_or_else(|| TimeError::new("invalid minute digits"))?;

        // Out-of-range values ("24:70") are not clock times.
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))?;

        Ok(Self(time))
    }

    /// Create from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the hour on the 12-hour clock (1-12).
    pub fn hour12(&self) -> u32 {
        match self.hour() % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Returns the period of the day.
    pub fn period(&self) -> Period {
        if self.hour() < 12 {
            Period::Am
        } else {
            Period::Pm
        }
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour12(), self.minute(), self.period())
    }
}

/// Ante or post meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

/// Format a raw departure string for display.
///
/// Valid 24-hour times are rendered on the 12-hour clock; anything else is
/// returned unchanged.
pub fn format_departure(raw: &str) -> String {
    match DepartureTime::parse(raw) {
        Ok(time) => time.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Parse a run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
