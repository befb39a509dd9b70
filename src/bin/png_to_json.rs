//! Convert a 16x16 PNG image to a JSON pixel grid

use std::process::ExitCode;

use spritegrid::cli;

fn main() -> ExitCode {
    cli::run_png_to_json()
}
