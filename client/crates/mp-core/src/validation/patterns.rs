//! Common input patterns and their messages.

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

// ASCII classes only: `\d` and `\w` in `regex` also match non-Latin digits.
pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("phone pattern compiles"));

pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/A-Za-z0-9_ .-]*)*/?$")
        .expect("url pattern compiles")
});

pub static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip code pattern compiles"));

pub static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("price pattern compiles"));

static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*#?&]+$").expect("password pattern compiles"));

/// At least `min_length` characters from `[A-Za-z0-9@$!%*#?&]`, with at least
/// one letter and one digit.
pub fn is_strong_password(value: &str, min_length: usize) -> bool {
    value.chars().count() >= min_length
        && PASSWORD_CHARSET.is_match(value)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

pub mod messages {
    pub const PASSWORD: &str =
        "Password must be at least 8 characters and include both letters and numbers";
    pub const PHONE: &str = "Please enter a valid phone number";
    pub const URL: &str = "Please enter a valid URL";
    pub const ZIP_CODE: &str = "Please enter a valid ZIP code";
    pub const PRICE: &str = "Please enter a valid price";

    pub fn password(min_length: usize) -> String {
        format!(
            "Password must be at least {min_length} characters and include both letters and numbers"
        )
    }
}
