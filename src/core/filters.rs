use crate::config::Config;
use crate::errors::AppResult;
use crate::models::calendar::{MONTHS, WEEKDAYS};
use crate::models::selection::{FilterMode, FilterSelection};
use crate::ui::prompt::Prompter;
use crate::utils::separator;
use std::io::{BufRead, Write};

pub const CITY_QUESTION: &str =
    "Which city(ies) do you want do select data? Use commas to list the names.";
pub const FILTER_QUESTION: &str = "Would you like to filter data by month,day,both or not at all?";
pub const MONTH_QUESTION: &str =
    "Which month(s) do you want do filter data? Use commas to list the names.";
pub const WEEKDAY_QUESTION: &str =
    "Which weekday(s) do you want do filter data? Use commas to list the names.";

/// Ask for cities, filter mode, and then months and/or weekdays.
pub fn get_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
) -> AppResult<FilterSelection> {
    prompter.line("Hello! Let's explore some US bikeshare data!")?;
    prompter.line(separator(40))?;

    let cities = prompter.choose(CITY_QUESTION, &cfg.city_keys())?;
    prompter.line(separator(30))?;

    let mode = FilterMode::from_answers(&prompter.choose(FILTER_QUESTION, &FilterMode::ANSWERS)?);
    prompter.line(separator(30))?;

    let months = if mode.wants_months() {
        prompter.choose(MONTH_QUESTION, &MONTHS)?
    } else {
        Vec::new()
    };
    if mode == FilterMode::Both {
        prompter.line(separator(30))?;
    }
    let weekdays = if mode.wants_weekdays() {
        prompter.choose(WEEKDAY_QUESTION, &WEEKDAYS)?
    } else {
        Vec::new()
    };

    prompter.line(separator(40))?;

    let selection = FilterSelection::new(&cities, &months, &weekdays);
    log::info!(
        "selection: cities={:?} months={:?} weekdays={:?}",
        selection.cities,
        selection.months,
        selection.weekdays
    );
    Ok(selection)
}
