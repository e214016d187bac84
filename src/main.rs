//! barcode-creator CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: run once, report any failure
//! (or the version banner), and exit with the matching status.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "barcode-creator".to_string());

    match cli::run(std::env::args_os()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report(&program, &e);
            ExitCode::from(e.exit_code())
        }
    }
}
