use super::{mode, run_report, value_counts};
use crate::errors::AppResult;
use crate::models::table::TripTable;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Demographics. Every field is independent: `None` means the column is
/// missing from the loaded files or holds no values after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Option<BTreeMap<String, usize>>,
    pub genders: Option<BTreeMap<String, usize>>,
    pub earliest_year: Option<i32>,
    pub most_recent_year: Option<i32>,
    pub most_common_year: Option<i32>,
}

pub fn compute(table: &TripTable) -> AppResult<UserStats> {
    let mut stats = UserStats::default();

    if table.columns.user_type {
        stats.user_types = counts(table.iter().filter_map(|t| t.user_type.as_deref()));
    }

    if table.columns.gender {
        stats.genders = counts(table.iter().filter_map(|t| t.gender.as_deref()));
    }

    if table.columns.birth_year {
        let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();
        stats.earliest_year = years.iter().copied().min();
        stats.most_recent_year = years.iter().copied().max();
        stats.most_common_year = mode(years);
    }

    Ok(stats)
}

fn counts<'a, I>(values: I) -> Option<BTreeMap<String, usize>>
where
    I: IntoIterator<Item = &'a str>,
{
    let counts = value_counts(values);
    if counts.is_empty() {
        return None;
    }
    Some(counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

pub fn print<W: Write>(out: &mut W, stats: &UserStats) -> io::Result<()> {
    if let Some(user_types) = &stats.user_types {
        writeln!(out, "Counts of user types")?;
        for (value, count) in user_types {
            writeln!(out, "{value}: {count}")?;
        }
    }

    if let Some(genders) = &stats.genders {
        writeln!(out, "\n\nCounts of genders")?;
        for (value, count) in genders {
            writeln!(out, "{value}: {count}")?;
        }
    }

    if let Some(year) = stats.earliest_year {
        writeln!(out, "\n\nEarliest year: {year}")?;
    }
    if let Some(year) = stats.most_recent_year {
        writeln!(out, "Most recent year: {year}")?;
    }
    if let Some(year) = stats.most_common_year {
        writeln!(out, "Most popular year: {year}")?;
    }

    Ok(())
}

pub fn report<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    run_report(out, "Calculating User Stats...", || compute(table), print::<W>)
}
