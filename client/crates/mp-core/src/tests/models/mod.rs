mod theme_preference;
mod toast;
mod user;
mod user_patch;
mod user_role;
