//! Rule constructors. Every rule except [`required`] treats an empty value
//! as valid, so optional fields only need `required` when they are mandatory.

use crate::validation::{Rule, patterns};

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const MATCH_MESSAGE: &str = "Fields do not match";

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

pub fn required() -> Rule {
    Rule::new(REQUIRED_MESSAGE, |value, _| !is_blank(value))
}

pub fn email() -> Rule {
    Rule::new(EMAIL_MESSAGE, |value, _| match value {
        Some(v) if !v.is_empty() => patterns::EMAIL.is_match(v),
        _ => true,
    })
}

/// Length is counted in characters, not bytes.
pub fn min_length(length: usize) -> Rule {
    Rule::new(
        format!("Must be at least {length} characters"),
        move |value, _| match value {
            Some(v) if !v.is_empty() => v.chars().count() >= length,
            _ => true,
        },
    )
}

pub fn max_length(length: usize) -> Rule {
    Rule::new(
        format!("Must be at most {length} characters"),
        move |value, _| match value {
            Some(v) if !v.is_empty() => v.chars().count() <= length,
            _ => true,
        },
    )
}

pub fn pattern(regex: Regex, message: impl Into<String>) -> Rule {
    Rule::new(message, move |value, _| match value {
        Some(v) if !v.is_empty() => regex.is_match(v),
        _ => true,
    })
}

/// Value must equal the value of `field` in the same form.
pub fn matches_field(field: impl Into<String>) -> Rule {
    let field = field.into();
    Rule::new(MATCH_MESSAGE, move |value, form| match value {
        Some(v) if !v.is_empty() => form.get(&field).is_some_and(|other| other == v),
        _ => true,
    })
}

/// Letters and digits both present, only allowed characters, at least
/// `min_length` characters.
pub fn password(min_length: usize) -> Rule {
    Rule::new(
        patterns::messages::password(min_length),
        move |value, _| match value {
            Some(v) if !v.is_empty() => patterns::is_strong_password(v, min_length),
            _ => true,
        },
    )
}
