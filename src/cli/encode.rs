//! Encode command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::encode::encode_file;

/// Execute the encode command
pub fn run_encode(input: &Path, output: &Path, description: &str) -> ExitCode {
    match encode_file(input, output, description) {
        Ok(_) => {
            println!("JSON saved to {}", output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
