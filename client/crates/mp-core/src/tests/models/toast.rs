use crate::models::palette::{DARK, LIGHT};
use crate::{ColorScheme, Palette, Toast, ToastKind};

#[test]
fn test_palette_for_scheme() {
    assert_eq!(Palette::for_scheme(ColorScheme::Light), &LIGHT);
    assert_eq!(Palette::for_scheme(ColorScheme::Dark), &DARK);
    assert_eq!(LIGHT.primary, "#007AFF");
    assert_eq!(DARK.background, "#000100");
}

#[test]
fn test_toast_kind_background_colors() {
    assert_eq!(ToastKind::Success.background(&LIGHT), LIGHT.success);
    assert_eq!(ToastKind::Error.background(&DARK), DARK.error);
    assert_eq!(ToastKind::Warning.background(&LIGHT), LIGHT.warning);
    assert_eq!(ToastKind::Info.background(&DARK), DARK.primary);
}

#[test]
fn test_toast_constructors() {
    assert_eq!(Toast::error("boom").kind, ToastKind::Error);
    assert_eq!(Toast::success("ok").kind, ToastKind::Success);
    assert_eq!(Toast::info("hi").message, "hi");
}
