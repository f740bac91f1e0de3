use crate::CliResult;

use std::process::ExitCode;

use serde_json::Value;

pub fn format_json(value: &Value, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print a command result and map it to the process exit code.
pub fn render(result: CliResult<Value>, pretty: bool) -> ExitCode {
    match result.and_then(|value| format_json(&value, pretty)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("Command failed: {e}");
            let error = e.to_json();
            match format_json(&error, pretty) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
