use super::{mode, run_report};
use crate::errors::{AppError, AppResult};
use crate::models::table::TripTable;
use std::io::{self, Write};

/// The most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: String,
    pub weekday: String,
    pub hour: u32,
}

pub fn compute(table: &TripTable) -> AppResult<TimeStats> {
    let month = mode(table.iter().map(|t| t.month.as_str())).ok_or(AppError::EmptyTable)?;
    let weekday = mode(table.iter().map(|t| t.weekday.as_str())).ok_or(AppError::EmptyTable)?;
    let hour = mode(table.iter().map(|t| t.start_hour())).ok_or(AppError::EmptyTable)?;

    Ok(TimeStats {
        month: month.to_string(),
        weekday: weekday.to_string(),
        hour,
    })
}

pub fn print<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    writeln!(out, "Most popular month: {}", stats.month)?;
    writeln!(out, "Most popular weekday: {}", stats.weekday)?;
    writeln!(out, "Most popular hour: {}", stats.hour)
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    run_report(
        out,
        "Calculating The Most Frequent Times of Travel...",
        || compute(table),
        print::<W>,
    )
}
