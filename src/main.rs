//! Spritegrid - Command-line tool for converting sprites between PNG and JSON grids

use std::process::ExitCode;

use spritegrid::cli;

fn main() -> ExitCode {
    cli::run()
}
