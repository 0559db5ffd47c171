//! Tests for loading and validating settings files.

use std::io::Write;
use strictly_housie::{EvaluationOrder, PatternKind, Session};
use strictly_housie_cli::{HousieSettings, SettingField};
use tempfile::NamedTempFile;

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = settings_file("players = 3\norder = \"stable\"\n");
    let settings = HousieSettings::from_file(file.path()).expect("load");

    assert_eq!(settings.players, 3);
    assert_eq!(settings.order, EvaluationOrder::Stable);
    assert_eq!(settings.range_end, 90);
    assert_eq!(settings.patterns, PatternKind::all());
    assert!(settings.validate().is_ok());
}

#[test]
fn test_full_file_round_trips_into_a_game() {
    let file = settings_file(
        r#"
range_start = 1
range_end = 30
players = 4
rows = 2
cols = 6
numbers_per_row = 3
patterns = ["top-line", "full-house"]
seed = 99
"#,
    );
    let settings = HousieSettings::from_file(file.path()).expect("load");
    settings.validate().expect("valid settings");

    let mut session = Session::configure(settings.to_game_config()).expect("valid game");
    while !session.is_over() {
        session.advance().expect("draw");
    }
    assert_eq!(session.summary().claimed().count(), 2);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = HousieSettings::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = settings_file("players = \"many\"\n");
    let err = HousieSettings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_unknown_pattern_is_rejected() {
    let file = settings_file("patterns = [\"four-corners\"]\n");
    assert!(HousieSettings::from_file(file.path()).is_err());
}

#[test]
fn test_validation_follows_table_rules() {
    let small_range = HousieSettings {
        range_end: 4,
        ..HousieSettings::default()
    };
    assert!(small_range.validate().is_err());

    let too_many_rows = HousieSettings {
        range_end: 10,
        rows: 11,
        ..HousieSettings::default()
    };
    let err = too_many_rows.validate().unwrap_err();
    assert!(err.message.starts_with("number of rows:"));

    let settings = HousieSettings::default();
    assert!(settings.check(SettingField::Players, 1).is_err());
    assert!(settings.check(SettingField::Players, 2).is_ok());
}
