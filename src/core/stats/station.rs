use super::{mode, run_report};
use crate::errors::{AppError, AppResult};
use crate::models::table::TripTable;
use std::io::{self, Write};

/// The most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// Formatted as `[start] - [end]`.
    pub route: String,
}

pub fn compute(table: &TripTable) -> AppResult<StationStats> {
    let start_station =
        mode(table.iter().map(|t| t.start_station.as_str())).ok_or(AppError::EmptyTable)?;
    let end_station =
        mode(table.iter().map(|t| t.end_station.as_str())).ok_or(AppError::EmptyTable)?;
    let route = mode(table.iter().map(|t| t.route())).ok_or(AppError::EmptyTable)?;

    Ok(StationStats {
        start_station: start_station.to_string(),
        end_station: end_station.to_string(),
        route,
    })
}

pub fn print<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    writeln!(out, "Most popular start station: {}", stats.start_station)?;
    writeln!(out, "Most popular end station: {}", stats.end_station)?;
    writeln!(
        out,
        "Most popular of combination between start/end station: {}",
        stats.route
    )
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    run_report(
        out,
        "Calculating The Most Popular Stations and Trip...",
        || compute(table),
        print::<W>,
    )
}
