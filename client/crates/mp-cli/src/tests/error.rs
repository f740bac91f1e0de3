use crate::{CliError, format_json};

use mp_core::ToastKind;
use mp_core::validation::ValidationErrors;
use mp_session::{SessionError, StorageError};

use std::path::PathBuf;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_toast_error_when_converted_then_message_kept() {
    let error = CliError::toast("Please fill in all fields");

    let toast = error.to_toast();

    assert_that!(toast.message, eq("Please fill in all fields"));
    assert_that!(toast.kind, eq(ToastKind::Error));
}

#[test]
fn given_validation_error_when_rendered_then_first_message_and_field_map() {
    let errors = ValidationErrors::from([
        ("email".to_string(), "Please enter a valid email address".to_string()),
        ("password".to_string(), "This field is required".to_string()),
    ]);
    let error = CliError::validation(errors);

    let value = error.to_json();

    assert_that!(
        value,
        eq(&json!({
            "message": "Please enter a valid email address",
            "kind": "error",
            "errors": {
                "email": "Please enter a valid email address",
                "password": "This field is required",
            },
        }))
    );
}

#[test]
fn given_busy_session_error_when_converted_then_friendly_message() {
    let error = CliError::from(SessionError::busy("sign_in"));

    assert_that!(error.to_toast().message, eq("Another operation is in progress"));
}

#[test]
fn given_busy_session_error_when_rendered_then_marked_retryable() {
    let error = CliError::from(SessionError::busy("sign_up"));

    assert_that!(error.is_retryable(), eq(true));
    assert_that!(
        error.to_json(),
        eq(&json!({
            "message": "Another operation is in progress",
            "kind": "error",
            "retryable": true,
        }))
    );
}

#[test]
fn given_storage_write_failure_when_converted_then_recovery_hint_shown() {
    // Given: A session write that failed on disk
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let storage = StorageError::file_write(PathBuf::from("/tmp/mp/user"), io);
    let hint = storage.recovery_hint();
    let error = CliError::from(SessionError::from(storage));

    // When: Rendering it for the user
    let value = error.to_json();

    // Then: The hint replaces the raw I/O message, and a retry may help
    assert_that!(error.to_toast().message, eq(hint));
    assert_that!(value.get("message"), some(eq(&json!(hint))));
    assert_that!(value.get("retryable"), some(eq(&json!(true))));
}

#[test]
fn given_invalid_key_error_when_rendered_then_not_retryable() {
    let error = CliError::from(SessionError::from(StorageError::invalid_key("a/b")));

    assert_that!(error.is_retryable(), eq(false));
    assert_that!(
        error.to_toast().message,
        eq("Internal error addressing stored data. Please report this issue.")
    );
}

#[test]
fn given_non_session_error_when_rendered_then_no_retry_hint() {
    let value = CliError::toast("Passwords do not match").to_json();

    assert_that!(value.get("retryable"), none());
}

#[test]
fn given_value_when_formatted_then_compact_or_pretty() {
    let value = json!({ "valid": true });

    assert_that!(format_json(&value, false).unwrap(), eq(r#"{"valid":true}"#));
    assert_that!(
        format_json(&value, true).unwrap(),
        eq("{\n  \"valid\": true\n}")
    );
}
