use std::process::ExitCode;

use earnings_tracker::cli::run_cli;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_cli(&args)
}
