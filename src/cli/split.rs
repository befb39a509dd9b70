//! Split command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::split::{split_file, SplitVariant};

/// Execute the split command
pub fn run_split(image_path: &Path, variant: SplitVariant, out_dir: Option<&Path>) -> ExitCode {
    let result = split_file(image_path, variant, out_dir, |_, path| {
        println!("Saved: {}", path.display());
    });

    match result {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
