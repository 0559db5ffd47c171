//! Tests for entering settings interactively.

use std::io::Cursor;
use strictly_housie_cli::{HousieSettings, request_settings};

fn run(script: &str) -> (Option<HousieSettings>, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let settings =
        request_settings(&mut input, &mut output, HousieSettings::default()).expect("in-memory io");
    (settings, String::from_utf8(output).expect("utf8"))
}

#[test]
fn test_enter_keeps_every_default() {
    let (settings, output) = run("\n\n\n\n\n\n");
    assert_eq!(settings, Some(HousieSettings::default()));
    assert_eq!(output.matches("No input detected").count(), 6);
}

#[test]
fn test_answers_are_checked_against_earlier_ones() {
    // start, end, players (1 rejected), rows, cols (2 rejected for 1 row), per row
    let (settings, output) = run("1\n20\n1\n3\n1\n2\n5\n5\n");
    let settings = settings.expect("completed");

    assert_eq!(settings.range_end, 20);
    assert_eq!(settings.players, 3);
    assert_eq!(settings.rows, 1);
    assert_eq!(settings.cols, 5);
    assert_eq!(settings.numbers_per_row, 5);
    assert!(output.contains("Invalid number of players, please enter a number > 1"));
    assert!(output.contains("Invalid number of columns, please enter a number where number >= 5"));
    assert!(settings.validate().is_ok());
}

#[test]
fn test_quit_abandons_setup() {
    let (settings, _) = run("1\n90\nQ\n");
    assert_eq!(settings, None);
}
