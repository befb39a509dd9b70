//! Spritegrid - Library for converting sprites between PNG and JSON pixel grids
//!
//! This library provides functionality to:
//! - Encode 16x16 sprites as JSON grids of color tokens with a sorted palette
//! - Decode JSON grids back into images
//! - Split 32x32 and 64x64 sprite sheets into 16x16 tiles

pub mod cli;
pub mod color;
pub mod config;
pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod output;
pub mod split;

pub use document::GridDocument;
pub use error::{GridError, Result};
pub use split::SplitVariant;
