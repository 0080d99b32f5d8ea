use std::str::FromStr;
use tempfiles::LogLevel;

#[test]
fn parse_levels_case_insensitive() {
    for (input, expected) in [
        ("quiet", LogLevel::Quiet),
        ("NONE", LogLevel::Quiet),
        ("Error", LogLevel::Quiet),
        ("normal", LogLevel::Normal),
        ("INFO", LogLevel::Info),
        ("verbose", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("TRACE", LogLevel::Debug),
    ] {
        assert_eq!(LogLevel::parse(input), Some(expected), "input {input}");
    }
}

#[test]
fn display_parses_back() {
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        let s = lvl.to_string();
        assert_eq!(LogLevel::from_str(&s).expect("display string parses"), lvl, "level {s}");
    }
}

#[test]
fn invalid_levels_are_errors() {
    assert!(LogLevel::from_str("loud").is_err());
    assert!(LogLevel::from_str("").is_err());
    assert_eq!(LogLevel::default(), LogLevel::Normal);
}
