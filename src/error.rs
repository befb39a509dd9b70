//! Error types shared by the encode, split, and decode operations

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::color::ColorError;

/// Error type for grid transcoding operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridError {
    /// The input image is not the fixed size the operation requires
    #[error(
        "image must be {}x{} pixels, got {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    DimensionMismatch {
        /// Required (width, height)
        expected: (u32, u32),
        /// Actual (width, height) of the input
        actual: (u32, u32),
    },
    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Decoding or encoding a raster image failed
    #[error("image error on '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Reading or writing a grid document failed
    #[error("JSON error on '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The grid document violates its shape or palette invariants
    #[error("invalid grid document: {0}")]
    InvalidDocument(String),
    /// A grid cell holds an unparseable color token
    #[error("invalid color at row {row}, column {col}: {source}")]
    InvalidToken {
        row: usize,
        col: usize,
        #[source]
        source: ColorError,
    },
}

impl GridError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        GridError::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn image(path: &Path, source: image::ImageError) -> Self {
        // The image crate wraps plain file errors; surface those as I/O failures.
        match source {
            image::ImageError::IoError(e) => GridError::io(path, e),
            other => GridError::Image { path: path.to_path_buf(), source: other },
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        GridError::Json { path: path.to_path_buf(), source }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Fail with [`GridError::DimensionMismatch`] unless `actual` equals `expected`.
pub fn check_dimensions(actual: (u32, u32), expected: (u32, u32)) -> Result<()> {
    if actual != expected {
        return Err(GridError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
