use super::run_report;
use crate::errors::{AppError, AppResult};
use crate::models::table::TripTable;
use crate::utils::{duration2readable, minutes2readable};
use chrono::Duration;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Sum of (end - start) over all rows.
    pub total: Duration,
    /// Mean of (end - start), in minutes.
    pub mean_minutes: f64,
}

pub fn compute(table: &TripTable) -> AppResult<DurationStats> {
    if table.is_empty() {
        return Err(AppError::EmptyTable);
    }

    // Millisecond sums stay exact, so the result is independent of row order.
    let total_ms: i64 = table.iter().map(|t| t.travel_time().num_milliseconds()).sum();
    let mean_minutes = total_ms as f64 / table.len() as f64 / 60_000.0;

    Ok(DurationStats {
        total: Duration::milliseconds(total_ms),
        mean_minutes,
    })
}

pub fn print<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(out, "Total travel time: {}", duration2readable(stats.total))?;
    writeln!(
        out,
        "Mean travel time: {} minute(s)",
        minutes2readable(stats.mean_minutes)
    )
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    run_report(out, "Calculating Trip Duration...", || compute(table), print::<W>)
}
