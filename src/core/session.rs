use crate::config::Config;
use crate::core::{filters, loader, stats, viewer};
use crate::errors::{AppError, AppResult};
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};

pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// One full pass: filters → load → raw rows → the four reports.
pub fn run_once<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, cfg: &Config) -> AppResult<()> {
    let selection = filters::get_filters(prompter, cfg)?;
    let table = loader::load_data(prompter, cfg, &selection)?;

    viewer::show_raw_data(prompter, &table)?;

    stats::time::report(prompter.out(), &table)?;
    prompter.pause()?;
    stats::station::report(prompter.out(), &table)?;
    prompter.pause()?;
    stats::duration::report(prompter.out(), &table)?;
    prompter.pause()?;
    stats::user::report(prompter.out(), &table)?;

    Ok(())
}

/// Loop until the restart answer is anything other than "yes".
/// Closing the input ends the session like a "no" would.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    let mut iteration = 1;
    loop {
        log::debug!("session iteration {iteration}");

        match run_once(prompter, cfg).and_then(|_| prompter.ask(RESTART_QUESTION)) {
            Ok(answer) if wants_restart(&answer) => iteration += 1,
            Ok(_) | Err(AppError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

/// Trimmed, case-insensitive match on "yes".
pub fn wants_restart(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
