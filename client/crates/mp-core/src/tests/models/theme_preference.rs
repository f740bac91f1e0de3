use crate::{ColorScheme, ThemePreference};

use std::str::FromStr;

#[test]
fn test_theme_preference_from_str() {
    assert_eq!(ThemePreference::from_str("light").unwrap(), ThemePreference::Light);
    assert_eq!(ThemePreference::from_str("dark").unwrap(), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_str("system").unwrap(), ThemePreference::System);
    assert!(ThemePreference::from_str("sepia").is_err());
}

#[test]
fn test_theme_preference_default_is_system() {
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

#[test]
fn test_explicit_preference_ignores_system_scheme() {
    assert_eq!(ThemePreference::Light.resolve(ColorScheme::Dark), ColorScheme::Light);
    assert_eq!(ThemePreference::Dark.resolve(ColorScheme::Light), ColorScheme::Dark);
}

#[test]
fn test_system_preference_follows_system_scheme() {
    assert_eq!(ThemePreference::System.resolve(ColorScheme::Dark), ColorScheme::Dark);
    assert_eq!(ThemePreference::System.resolve(ColorScheme::Light), ColorScheme::Light);
}

#[test]
fn test_color_scheme_from_str() {
    assert_eq!(ColorScheme::from_str("dark").unwrap(), ColorScheme::Dark);
    assert!(ColorScheme::from_str("system").is_err());
}
