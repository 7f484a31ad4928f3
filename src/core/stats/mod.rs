//! Descriptive statistics over the working table.
//!
//! Every reporter is split in two: a pure `compute` step returning a small
//! struct (unit-testable) and a `print` step writing the report lines.
//! `run_report` wraps both with the section header, the timing line and the
//! trailing separator.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::separator;
use crate::utils::time::elapsed_secs;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::io::{self, Write};
use std::time::Instant;

/// Most frequent value; ties go to the value seen first.
pub fn mode<I, T>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut order: Vec<T> = Vec::new();
    let mut counts: HashMap<T, usize> = HashMap::new();

    for v in values {
        let count = counts.entry(v.clone()).or_insert(0);
        if *count == 0 {
            order.push(v);
        }
        *count += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for v in order {
        let count = counts[&v];
        let better = match &best {
            Some((_, best_count)) => count > *best_count,
            None => true,
        };
        if better {
            best = Some((v, count));
        }
    }
    best.map(|(v, _)| v)
}

/// Occurrences per distinct value, sorted by value.
pub fn value_counts<'a, I>(values: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Print one timed report section. `AppError::EmptyTable` from `compute`
/// becomes a warning line; any other error is propagated.
pub fn run_report<W, T, C, P>(out: &mut W, title: &str, compute: C, print: P) -> AppResult<()>
where
    W: Write,
    C: FnOnce() -> AppResult<T>,
    P: FnOnce(&mut W, &T) -> io::Result<()>,
{
    header(out, title)?;
    let start = Instant::now();

    match compute() {
        Ok(stats) => print(out, &stats)?,
        Err(AppError::EmptyTable) => warning(out, AppError::EmptyTable)?,
        Err(e) => return Err(e),
    }

    writeln!(out, "\nThis took {} seconds.", elapsed_secs(start.elapsed()))?;
    writeln!(out, "{}", separator(40))?;
    Ok(())
}
