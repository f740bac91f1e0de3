//! mp - marketplace session CLI
//!
//! Drives the session core from the command line. Every command prints JSON
//! on stdout; failures print an error toast as JSON on stderr.
//!
//! # Examples
//!
//! ```bash
//! # Sign up as a seller and see which tree the router picks
//! mp sign-up --name Shop --email shop@example.com \
//!     --password secret12 --confirm-password secret12 --role seller
//! mp route --pretty
//!
//! # Switch to the dark theme
//! mp theme set dark
//! ```

use mp_cli::{Cli, CliResult, execute, initialize_logger, render};
use mp_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => return render(Err(e), cli.pretty),
    };

    // Logger goes first so everything after it is captured
    if let Err(e) = initialize_logger(&config) {
        return render(Err(e), cli.pretty);
    }
    config.log_summary();

    let result = execute(cli.command, &config).await;
    render(result, cli.pretty)
}

fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}
