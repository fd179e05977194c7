//! Binary entrypoint for the `confgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match confgen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
