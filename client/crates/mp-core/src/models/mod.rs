pub mod color_scheme;
pub mod palette;
pub mod theme_preference;
pub mod toast;
pub mod user;
pub mod user_patch;
pub mod user_role;
