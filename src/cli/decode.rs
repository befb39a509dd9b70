//! Decode command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::decode::decode_file;

/// Execute the decode command
pub fn run_decode(input: &Path, output: &Path) -> ExitCode {
    match decode_file(input, output) {
        Ok(document) => {
            println!("PNG saved to {} ({}x{})", output.display(), document.width, document.height);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
