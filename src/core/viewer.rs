//! Paginated raw-row viewer.

use crate::errors::AppResult;
use crate::models::table::TripTable;
use crate::models::trip::Trip;
use crate::ui::prompt::Prompter;
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};

pub const PAGE_SIZE: usize = 5;

pub const VIEW_QUESTION: &str =
    "Do you want to see raw data? (Press 'y' for yes and 'n' for no)\n>";
pub const NEXT_PAGE_QUESTION: &str =
    "Do you want to go to next page? (Press 'y' to continue and 'n' for exit)\n>";

/// Offer the raw rows, `PAGE_SIZE` at a time, until the user declines
/// or the table runs out.
pub fn show_raw_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
) -> AppResult<()> {
    if !prompter.yes_no(VIEW_QUESTION)? {
        return Ok(());
    }

    let total = table.len();
    let mut offset = 0;

    loop {
        prompter.line(page_header(offset, total))?;
        prompter.line(render_page(table, offset))?;
        offset += PAGE_SIZE;

        if offset >= total {
            log::debug!("raw data exhausted after {total} rows");
            return Ok(());
        }
        if !prompter.yes_no(NEXT_PAGE_QUESTION)? {
            return Ok(());
        }
    }
}

/// `row 1 - 5 of total 7 rows` (1-based; the upper bound is not clamped).
pub fn page_header(offset: usize, total: usize) -> String {
    format!(
        "row {} - {} of total {} rows\n",
        offset + 1,
        offset + PAGE_SIZE,
        total
    )
}

/// Render rows `[offset, offset + PAGE_SIZE)` as an ASCII table.
pub fn render_page(table: &TripTable, offset: usize) -> String {
    let cols = table.columns;

    let mut columns = vec![Column::right("#")];
    if cols.id {
        columns.push(Column::right("Id"));
    }
    columns.push(Column::left("Start Time"));
    columns.push(Column::left("End Time"));
    if cols.trip_duration {
        columns.push(Column::right("Trip Duration"));
    }
    columns.push(Column::left("Start Station"));
    columns.push(Column::left("End Station"));
    if cols.user_type {
        columns.push(Column::left("User Type"));
    }
    if cols.gender {
        columns.push(Column::left("Gender"));
    }
    if cols.birth_year {
        columns.push(Column::right("Birth Year"));
    }
    columns.push(Column::left("City"));
    columns.push(Column::left("Month"));
    columns.push(Column::left("Weekday"));

    let mut grid = Table::new(columns);
    for (i, trip) in table.page(offset, PAGE_SIZE).iter().enumerate() {
        grid.add_row(row_cells(offset + i + 1, trip, table));
    }
    grid.render()
}

fn row_cells(position: usize, t: &Trip, table: &TripTable) -> Vec<String> {
    let cols = table.columns;
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    let mut cells = vec![position.to_string()];
    if cols.id {
        cells.push(opt(&t.id));
    }
    cells.push(t.start.format("%Y-%m-%d %H:%M:%S").to_string());
    cells.push(t.end.format("%Y-%m-%d %H:%M:%S").to_string());
    if cols.trip_duration {
        cells.push(t.trip_duration.map(|d| d.to_string()).unwrap_or_default());
    }
    cells.push(t.start_station.clone());
    cells.push(t.end_station.clone());
    if cols.user_type {
        cells.push(opt(&t.user_type));
    }
    if cols.gender {
        cells.push(opt(&t.gender));
    }
    if cols.birth_year {
        cells.push(t.birth_year.map(|y| y.to_string()).unwrap_or_default());
    }
    cells.push(t.city.clone());
    cells.push(t.month.clone());
    cells.push(t.weekday.clone());
    cells
}
