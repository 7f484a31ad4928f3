//! Formatting utilities used for report output.

use chrono::Duration;

/// Human readable duration: `D days HH:MM:SS`, with a leading `-` for
/// negative values (end before start in dirty data).
pub fn duration2readable(d: Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.abs();

    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    format!(
        "{}{} days {:02}:{:02}:{:02}",
        sign, days, hours, minutes, seconds
    )
}

/// Minutes as a decimal number, e.g. `15.5`.
pub fn minutes2readable(minutes: f64) -> String {
    let s = format!("{:.6}", minutes);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Separator line printed between report sections.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}
