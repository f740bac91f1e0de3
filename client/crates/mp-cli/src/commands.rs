use crate::{theme_commands::ThemeCommands, validate_commands::ValidateCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in (any credentials are accepted; the user is a buyer)
    SignIn {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Create an account
    SignUp {
        /// Display name
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
        /// buyer, seller or runner
        #[arg(long, default_value = "buyer")]
        role: String,
    },

    /// Sign out and delete the stored session
    SignOut,

    /// Show the current session
    Whoami,

    /// Update fields of the signed-in user
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// buyer, seller or runner
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        verified: Option<bool>,
    },

    /// Show the navigation tree selected for the current session
    Route,

    /// Theme operations
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },

    /// Check form input without signing in
    Validate {
        #[command(subcommand)]
        action: ValidateCommands,
    },

    /// Walk through sign-up, role change and sign-out on a throwaway session
    Demo,
}
