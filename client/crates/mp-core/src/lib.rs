pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::color_scheme::ColorScheme;
pub use models::palette::Palette;
pub use models::theme_preference::ThemePreference;
pub use models::toast::{Toast, ToastKind};
pub use models::user::User;
pub use models::user_patch::UserPatch;
pub use models::user_role::UserRole;
