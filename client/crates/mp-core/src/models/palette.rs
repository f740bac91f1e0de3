//! Named color tokens for the light and dark schemes.

use crate::ColorScheme;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub notification: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub tab_bar: &'static str,
    pub tab_bar_inactive: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#007AFF",
    background: "#EAEAEA",
    card: "#F2F2F7",
    text: "#000100",
    border: "#C6C6C8",
    notification: "#FF3B30",
    success: "#34C759",
    warning: "#FF9500",
    error: "#FF3B30",
    tab_bar: "#FFFFFF",
    tab_bar_inactive: "#8E8E93",
};

pub const DARK: Palette = Palette {
    primary: "#0A84FF",
    background: "#000100",
    card: "#1C1C1E",
    text: "#EAEAEA",
    border: "#38383A",
    notification: "#FF453A",
    success: "#32D74B",
    warning: "#FF9F0A",
    error: "#FF453A",
    tab_bar: "#1C1C1E",
    tab_bar_inactive: "#8E8E93",
};

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> &'static Palette {
        match scheme {
            ColorScheme::Light => &LIGHT,
            ColorScheme::Dark => &DARK,
        }
    }
}
