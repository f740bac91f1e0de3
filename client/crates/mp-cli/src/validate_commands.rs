use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ValidateCommands {
    /// Validate the sign-in form
    SignIn {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Validate the sign-up form
    SignUp {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
}
