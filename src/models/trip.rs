use chrono::{Duration, NaiveDateTime, Timelike};
use serde::Deserialize;

/// One CSV row as stored on disk. Unknown columns are ignored; optional
/// columns deserialize to `None` when absent or empty.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "", default)]
    pub id: Option<String>,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A row of the working table.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Option<String>,
    pub start: NaiveDateTime, // ⇔ "Start Time"
    pub end: NaiveDateTime,   // ⇔ "End Time"
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub city: String,    // added at load time
    pub month: String,   // e.g. "January", from `start`
    pub weekday: String, // e.g. "Sunday", from `start`
}

impl Trip {
    /// Build a trip with the derived month/weekday columns filled in.
    pub fn new(
        city: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        start_station: &str,
        end_station: &str,
    ) -> Self {
        Self {
            id: None,
            start,
            end,
            trip_duration: None,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            city: city.to_string(),
            month: start.format("%B").to_string(),
            weekday: start.format("%A").to_string(),
        }
    }

    /// Wall-clock time between start and end.
    pub fn travel_time(&self) -> Duration {
        self.end - self.start
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    /// `[start] - [end]` label used for the popular-route statistic.
    pub fn route(&self) -> String {
        format!("[{}] - [{}]", self.start_station, self.end_station)
    }
}
