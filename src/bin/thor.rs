use thor::*;

use clap::error::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    telemetry::init_tracing();

    let config = match cli::parse_from(std::env::args_os()) {
        Ok(config) => config,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            println!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    match dispatch::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
