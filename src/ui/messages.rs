use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{} {}", Colour::Blue.bold().paint(ICON_INFO), msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg)
}

/// Fatal errors go to stderr, outside of the session's output stream.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} Error: {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, e.g. "Calculating User Stats..."
pub fn header<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "\n{}\n", Style::new().bold().paint(msg.to_string()))
}
