use bikeshare::core::session::wants_restart;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bike, data_dir};

/// city, filter mode, no raw data, three pauses, no restart
fn script(city: &str, filters: &[&str]) -> String {
    let mut s = format!("{city}\n");
    for f in filters {
        s.push_str(f);
        s.push('\n');
    }
    s.push_str("n\n\n\n\nno\n");
    s
}

#[test]
fn test_full_session_chicago() {
    let dir = data_dir();

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(script("chicago", &["none"]))
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("chicago.csv"))
        .stdout(contains("Most popular month: June"))
        .stdout(contains("Most popular start station: Wood St & Hubbard St"))
        .stdout(contains(
            "Most popular of combination between start/end station: [Wood St & Hubbard St] - [Damen Ave & Chicago Ave]",
        ))
        .stdout(contains("Total travel time:"))
        .stdout(contains("Counts of user types"))
        .stdout(contains("Counts of genders"))
        .stdout(contains("Earliest year: 1981"))
        .stdout(contains("Would you like to restart?"));
}

#[test]
fn test_washington_skips_gender_and_birth_year() {
    let dir = data_dir();

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(script("washington", &["none"]))
        .assert()
        .success()
        .stdout(contains("Counts of user types"))
        .stdout(contains("Subscriber: 2"))
        .stdout(contains("Counts of genders").not())
        .stdout(contains("Earliest year").not());
}

#[test]
fn test_filters_that_exclude_everything() {
    let dir = data_dir();

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(script("chicago", &["months", "february"]))
        .assert()
        .success()
        .stdout(contains("No data available for the selected filters."))
        .stdout(contains("Most popular month").not());
}

#[test]
fn test_restart_runs_a_second_iteration() {
    let dir = data_dir();
    let input = "chicago\nnone\nn\n\n\n\n YES \nwashington\nweekdays\nsaturday\nn\n\n\n\nno\n";

    let assert = bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(input)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("Hello! Let's explore").count(), 2);
    assert!(stdout.contains("Most popular weekday: Saturday"));
}

#[test]
fn test_raw_data_pages_in_session() {
    let dir = data_dir();

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin("chicago,washington\nnone\ny\n\n\n\nno\n")
        .assert()
        .success()
        .stdout(contains("row 1 - 5 of total 5 rows"))
        .stdout(contains("| City"))
        .stdout(contains("Do you want to go to next page?").not());
}

#[test]
fn test_invalid_city_is_rejected_then_accepted() {
    let dir = data_dir();

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(script("paris\nchicago", &["none"]))
        .assert()
        .success()
        .stdout(contains("Invalid answer paris"))
        .stdout(contains("Most popular month: June"));
}

#[test]
fn test_undecodable_answer_is_rejected_then_accepted() {
    let dir = data_dir();
    let mut stdin = b"chic\xffago\n".to_vec();
    stdin.extend_from_slice(script("chicago", &["none"]).as_bytes());

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(contains("Invalid answer chic"))
        .stdout(contains("Most popular month: June"));
}

#[test]
fn test_missing_dataset_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();

    bike()
        .args(["--data-dir", &dir.path().to_string_lossy()])
        .write_stdin(script("chicago", &["none"]))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("chicago.csv"));
}

#[test]
fn test_closed_input_ends_cleanly() {
    bike().write_stdin("").assert().success();
}

#[test]
fn test_custom_config_city_map() {
    let dir = data_dir();
    fs::copy(dir.path().join("chicago.csv"), dir.path().join("boston.csv")).unwrap();

    let cfg_path = dir.path().join("bikeshare.yaml");
    fs::write(
        &cfg_path,
        format!(
            "data_dir: {}\ncities:\n  - city: boston\n    file: boston.csv\n",
            dir.path().display()
        ),
    )
    .unwrap();

    bike()
        .args(["--config", &cfg_path.to_string_lossy()])
        .write_stdin(script("boston", &["none"]))
        .assert()
        .success()
        .stdout(contains("valid answer: boston )"))
        .stdout(contains("boston.csv"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("bad.yaml");
    fs::write(&cfg_path, "cities: []\n").unwrap();

    bike()
        .args(["--config", &cfg_path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_restart_answer_is_normalized() {
    assert!(wants_restart("yes"));
    assert!(wants_restart("  YES\n"));
    assert!(!wants_restart("y"));
    assert!(!wants_restart(""));
    assert!(!wants_restart("no"));
}
