//! Split a 64x64 sprite into sixteen 16x16 tiles

use std::process::ExitCode;

use spritegrid::cli;
use spritegrid::split::SplitVariant;

fn main() -> ExitCode {
    cli::run_split_tool(SplitVariant::Grid4x4)
}
