//! Split a 32x32 sprite into four 16x16 tiles

use std::process::ExitCode;

use spritegrid::cli;
use spritegrid::split::SplitVariant;

fn main() -> ExitCode {
    cli::run_split_tool(SplitVariant::Quad)
}
