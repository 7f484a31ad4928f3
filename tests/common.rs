#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::models::table::{Columns, TripTable};
use bikeshare::models::trip::Trip;
use bikeshare::ui::prompt::Prompter;
use bikeshare::utils::time::parse_timestamp;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FULL_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
pub const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

/// Three Chicago trips: June (Friday), May (Thursday), January (Wednesday).
pub const CHICAGO_ROWS: [&str; 3] = [
    "1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0",
    "955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0",
    "9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,1981.0",
];

/// Two Washington trips, no Gender / Birth Year columns.
pub const WASHINGTON_ROWS: [&str; 2] = [
    "1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber",
    "482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber",
];

pub fn bike() -> Command {
    cargo_bin_cmd!("bikeshare")
}

pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// Temp data dir with chicago.csv and washington.csv (no NYC file).
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_csv(dir.path(), "chicago.csv", FULL_HEADER, &CHICAGO_ROWS);
    write_csv(dir.path(), "washington.csv", WASHINGTON_HEADER, &WASHINGTON_ROWS);
    dir
}

pub fn ts(s: &str) -> chrono::NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp")
}

pub fn trip(start: &str, end: &str, from: &str, to: &str) -> Trip {
    Trip::new("chicago", ts(start), ts(end), from, to)
}

pub fn table(trips: Vec<Trip>) -> TripTable {
    TripTable::new(trips, Columns::default())
}

/// Every optional column present (a Chicago / NYC style file).
pub fn all_columns() -> Columns {
    Columns {
        id: true,
        trip_duration: true,
        user_type: true,
        gender: true,
        birth_year: true,
    }
}

pub fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(p.into_output()).expect("utf8 output")
}
