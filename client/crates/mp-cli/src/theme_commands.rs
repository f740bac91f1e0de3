use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the preference, resolved scheme and palette
    Get,
    /// Store a new preference
    Set {
        /// light, dark or system
        theme: String,
    },
}
