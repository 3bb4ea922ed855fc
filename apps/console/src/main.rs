//! # Supply Console Entry Point
//!
//! ```text
//! supply [--config <path>]
//! ```
//!
//! Exit codes: 0 on normal exit or Ctrl-C, 1 on any other error.

use std::path::PathBuf;
use std::process::ExitCode;

use supply_console::error::AppError;

fn main() -> ExitCode {
    let config_path = match parse_args(std::env::args().skip(1)) {
        Ok(path) => path,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: supply [--config <path>]");
            return ExitCode::FAILURE;
        }
    };

    match supply_console::run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Interrupted) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, String> {
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(config_path)
}
