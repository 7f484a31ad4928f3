//! Dataset loading: read one CSV per city, derive calendar columns, filter.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::selection::FilterSelection;
use crate::models::table::{Columns, TripTable};
use crate::models::trip::{RawTrip, Trip};
use crate::ui::messages::info;
use crate::ui::prompt::Prompter;
use crate::utils::separator;
use crate::utils::time::{elapsed_secs, parse_timestamp};
use csv::{ReaderBuilder, StringRecord};
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

const REQUIRED_COLUMNS: [&str; 4] = ["Start Time", "End Time", "Start Station", "End Station"];

/// Load every selected city, then apply the month/weekday filters.
pub fn load_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
    selection: &FilterSelection,
) -> AppResult<TripTable> {
    writeln!(prompter.out())?;
    info(
        prompter.out(),
        "The program is loading the data for the filters of your choice.",
    )?;
    let start = Instant::now();

    let mut trips = Vec::new();
    let mut columns = Columns::default();

    for city in &selection.cities {
        let path = cfg.city_file(city)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        prompter.line(&file_name)?;

        let (city_trips, city_columns) = read_city(&path, city)?;
        log::debug!("{}: {} rows from {}", city, city_trips.len(), path.display());

        trips.extend(city_trips);
        columns = columns.merge(city_columns);
    }

    let table = apply_filters(TripTable::new(trips, columns), selection);

    let elapsed = start.elapsed();
    log::info!("loaded {} rows in {:?}", table.len(), elapsed);
    prompter.line(format!("\nThis took {} seconds.", elapsed_secs(elapsed)))?;
    prompter.line(separator(40))?;

    Ok(table)
}

/// Read one city CSV into trips tagged with `city`, keeping file order.
pub fn read_city(path: &Path, city: &str) -> AppResult<(Vec<Trip>, Columns)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| AppError::DatasetOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let file = path.display().to_string();
    let headers = rdr.headers()?.clone();
    let columns = check_columns(&headers, &file)?;

    let mut trips = Vec::new();
    for (i, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result?;
        trips.push(to_trip(raw, city, &file, i + 1)?);
    }

    Ok((trips, columns))
}

fn check_columns(headers: &StringRecord, file: &str) -> AppResult<Columns> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !has(**c)) {
        return Err(AppError::MissingColumn {
            file: file.to_string(),
            column: *missing,
        });
    }

    Ok(Columns {
        id: has(""),
        trip_duration: has("Trip Duration"),
        user_type: has("User Type"),
        gender: has("Gender"),
        birth_year: has("Birth Year"),
    })
}

fn to_trip(raw: RawTrip, city: &str, file: &str, row: usize) -> AppResult<Trip> {
    let timestamp = |value: &str| {
        parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp {
            file: file.to_string(),
            row,
            value: value.to_string(),
        })
    };

    let start = timestamp(raw.start_time.as_str())?;
    let end = timestamp(raw.end_time.as_str())?;

    let mut trip = Trip::new(city, start, end, &raw.start_station, &raw.end_station);
    trip.id = raw.id.filter(|s| !s.trim().is_empty());
    trip.trip_duration = raw.trip_duration;
    trip.user_type = non_empty(raw.user_type);
    trip.gender = non_empty(raw.gender);
    trip.birth_year = raw.birth_year.filter(|y| y.is_finite()).map(|y| y as i32);
    Ok(trip)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Keep rows whose month and weekday both pass the selection.
pub fn apply_filters(table: TripTable, selection: &FilterSelection) -> TripTable {
    let columns = table.columns;
    let trips = table
        .trips
        .into_iter()
        .filter(|t| selection.keeps_month(&t.month) && selection.keeps_weekday(&t.weekday))
        .collect();
    TripTable::new(trips, columns)
}
