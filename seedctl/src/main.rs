//! CLI entrypoint for `seedctl`.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use seedctl::logging::{init_logging, report_unlogged};
use seedctl::{Args, SeedctlError};
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging() {
        // A failed stderr write leaves nowhere to report anything.
        report_unlogged(&err, &mut std::io::stderr().lock()).ok();
        return ExitCode::FAILURE;
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SeedctlError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    seedctl::run(args, &mut out)?;
    out.flush()?;
    Ok(())
}
