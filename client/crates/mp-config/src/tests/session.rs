use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{ConcurrencyPolicy, Config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_default_config_when_load_then_concurrency_rejects() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.concurrency, eq(ConcurrencyPolicy::Reject));
}

#[test]
#[serial]
fn given_queue_in_toml_when_load_then_concurrency_queues() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[session]\nconcurrency = \"queue\"");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.concurrency, eq(ConcurrencyPolicy::Queue));
}

#[test]
#[serial]
fn given_empty_display_name_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _name = EnvGuard::set("MP_SESSION_SIGN_IN_DISPLAY_NAME", "   ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_display_name_longer_than_name_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _limit = EnvGuard::set("MP_VALIDATION_MAX_NAME_LENGTH", "4");
    let _name = EnvGuard::set("MP_SESSION_SIGN_IN_DISPLAY_NAME", "Test User");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_custom_display_name_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _name = EnvGuard::set("MP_SESSION_SIGN_IN_DISPLAY_NAME", "Guest Shopper");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_that!(
        config.session.sign_in_display_name.as_str(),
        eq("Guest Shopper")
    );
}
