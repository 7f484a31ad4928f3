//! Time utilities: parsing dataset timestamps, formatting elapsed time.

use chrono::NaiveDateTime;
use std::time::Duration;

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a `Start Time` / `End Time` cell (e.g. `2017-01-01 00:07:57`).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Seconds with sub-second precision, as printed in "This took N seconds."
pub fn elapsed_secs(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}
