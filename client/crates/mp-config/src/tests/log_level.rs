use crate::{LogLevel, LoggingConfig};

use googletest::assert_that;
use googletest::prelude::{eq, none, ok, some};
use log::LevelFilter;

#[test]
fn given_mixed_case_name_when_parsed_then_level_matched() {
    assert_that!(LogLevel::from_name("WARN"), some(eq(LogLevel(LevelFilter::Warn))));
    assert_that!(LogLevel::from_name(" Debug "), some(eq(LogLevel(LevelFilter::Debug))));
    assert_that!(LogLevel::from_name("off"), some(eq(LogLevel(LevelFilter::Off))));
}

#[test]
fn given_unknown_name_when_parsed_then_no_match_and_lenient_parse_is_info() {
    assert_that!(LogLevel::from_name("chatty"), none());
    assert_that!(LogLevel::parse_lenient("chatty"), eq(LogLevel(LevelFilter::Info)));
    assert_that!("".parse::<LogLevel>(), ok(eq(LogLevel::default())));
}

#[test]
fn given_non_string_level_in_toml_when_deserialized_then_info_and_siblings_kept() {
    // Given: A logging table whose level has the wrong type
    let toml_str = "level = 3\ncolored = false";

    // When
    let logging: LoggingConfig = toml::from_str(toml_str).unwrap();

    // Then: Only the bad field falls back
    assert_that!(logging.level, eq(LogLevel(LevelFilter::Info)));
    assert_that!(logging.colored, eq(false));
}

#[test]
fn given_level_when_displayed_then_config_name_that_parses_back() {
    for filter in LevelFilter::iter() {
        let level = LogLevel(filter);

        let name = level.to_string();

        assert!(!name.chars().any(|c| c.is_ascii_uppercase()));
        assert_that!(LogLevel::from_name(&name), some(eq(level)));
    }
}
