//! Color grid documents
//!
//! A [`GridDocument`] is the JSON form of a sprite: a row-major grid of color
//! tokens plus the sorted palette of opaque tokens it uses. The serialized key
//! names and order (`type`, `description`, `width`, `height`, `sprite`,
//! `colors`) are the ones game code loads sprites from.

use std::collections::BTreeSet;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize};

use crate::color::is_transparent_token;
use crate::error::{GridError, Result};

/// Value of the `type` field for pixel grid documents
pub const DOCUMENT_KIND: &str = "pixel";

/// A sprite as a grid of color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    /// Document tag, always [`DOCUMENT_KIND`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text description
    pub description: String,
    /// Grid width in pixels
    pub width: u32,
    /// Grid height in pixels
    pub height: u32,
    /// Rows of color tokens, top to bottom
    #[serde(rename = "sprite")]
    pub grid: Vec<Vec<String>>,
    /// Distinct non-transparent tokens in `grid`, sorted ascending
    #[serde(rename = "colors")]
    pub palette: Vec<String>,
}

impl GridDocument {
    /// Build a document from a grid, deriving dimensions and palette.
    ///
    /// Width is taken from the first row; use [`GridDocument::validate`] to
    /// check that rows are uniform.
    pub fn from_grid(description: impl Into<String>, grid: Vec<Vec<String>>) -> Self {
        let height = grid.len() as u32;
        let width = grid.first().map_or(0, |row| row.len() as u32);
        let palette = collect_palette(&grid);
        Self {
            kind: DOCUMENT_KIND.to_string(),
            description: description.into(),
            width,
            height,
            grid,
            palette,
        }
    }

    /// Check the document's shape and palette invariants.
    ///
    /// Token syntax is not checked here; decoding reports bad tokens with
    /// their grid position.
    pub fn validate(&self) -> Result<()> {
        if self.kind != DOCUMENT_KIND {
            return Err(GridError::InvalidDocument(format!(
                "type must be \"{}\", found \"{}\"",
                DOCUMENT_KIND, self.kind
            )));
        }

        if self.grid.len() != self.height as usize {
            return Err(GridError::InvalidDocument(format!(
                "height is {} but grid has {} rows",
                self.height,
                self.grid.len()
            )));
        }

        for (y, row) in self.grid.iter().enumerate() {
            if row.len() != self.width as usize {
                return Err(GridError::InvalidDocument(format!(
                    "row {} has {} cells, expected width {}",
                    y,
                    row.len(),
                    self.width
                )));
            }
        }

        let used: BTreeSet<&str> = self.grid.iter().flatten().map(String::as_str).collect();
        for color in &self.palette {
            if is_transparent_token(color) {
                return Err(GridError::InvalidDocument(format!(
                    "palette must not contain the transparent color {}",
                    color
                )));
            }
            if !used.contains(color.as_str()) {
                return Err(GridError::InvalidDocument(format!(
                    "palette color {} does not appear in the grid",
                    color
                )));
            }
        }

        Ok(())
    }

    /// Serialize with 4-space indentation, keys in declaration order.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    /// Parse a document from JSON text.
    pub fn from_json(s: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Distinct non-transparent tokens of a grid in ascending order.
pub fn collect_palette(grid: &[Vec<String>]) -> Vec<String> {
    grid.iter()
        .flatten()
        .filter(|token| !is_transparent_token(token))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
