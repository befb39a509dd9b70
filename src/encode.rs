//! PNG to JSON grid encoding.
//!
//! Converts a 16x16 sprite into a [`GridDocument`]: every pixel becomes a
//! color token in row-major order, and the opaque tokens are collected into
//! a sorted palette.

use image::RgbaImage;
use log::debug;
use std::path::Path;

use crate::color::pixel_to_token;
use crate::document::GridDocument;
use crate::error::{check_dimensions, GridError, Result};
use crate::output::{load_image, write_text};

/// Required width and height of an encodable sprite
pub const SPRITE_SIZE: u32 = 16;

/// Description used when none is given
pub const DEFAULT_DESCRIPTION: &str = "Converted 16x16 PNG to JSON";

/// Encode a 16x16 image into a grid document.
///
/// # Errors
///
/// Returns [`GridError::DimensionMismatch`] for any other image size.
pub fn encode_image(image: &RgbaImage, description: &str) -> Result<GridDocument> {
    check_dimensions(image.dimensions(), (SPRITE_SIZE, SPRITE_SIZE))?;

    let grid: Vec<Vec<String>> = image
        .rows()
        .map(|row| row.map(|pixel| pixel_to_token(*pixel)).collect())
        .collect();

    Ok(GridDocument::from_grid(description, grid))
}

/// Read a PNG, encode it, and write the document as JSON.
///
/// Nothing is written if the image fails validation.
pub fn encode_file(input: &Path, output: &Path, description: &str) -> Result<GridDocument> {
    let image = load_image(input)?.to_rgba8();
    debug!("decoded {} ({}x{})", input.display(), image.width(), image.height());

    let document = encode_image(&image, description)?;
    let json = document.to_json().map_err(|e| GridError::json(output, e))?;
    write_text(output, &json)?;

    debug!("wrote {} ({} colors)", output.display(), document.palette.len());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TRANSPARENT_TOKEN;
    use image::Rgba;

    fn checkerboard() -> RgbaImage {
        RgbaImage::from_fn(SPRITE_SIZE, SPRITE_SIZE, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    fn is_token(t: &str) -> bool {
        t == TRANSPARENT_TOKEN
            || (t.len() == 7
                && t.starts_with('#')
                && t[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)))
    }

    #[test]
    fn test_encode_shape_and_tokens() {
        let doc = encode_image(&checkerboard(), "board").unwrap();
        assert_eq!(doc.width, 16);
        assert_eq!(doc.height, 16);
        assert_eq!(doc.grid.len(), 16);
        assert!(doc.grid.iter().all(|row| row.len() == 16));
        assert!(doc.grid.iter().flatten().all(|t| is_token(t)));
        assert_eq!(doc.grid[0][0], "#ff0000");
        assert_eq!(doc.grid[0][1], TRANSPARENT_TOKEN);
        assert_eq!(doc.description, "board");
        assert_eq!(doc.kind, "pixel");
    }

    #[test]
    fn test_encode_palette_sorted_distinct() {
        let image = RgbaImage::from_fn(16, 16, |x, _| match x % 4 {
            0 => Rgba([0xcc, 0, 0, 255]),
            1 => Rgba([0, 0xaa, 0, 128]),
            2 => Rgba([0x11, 0x11, 0x11, 255]),
            _ => Rgba([9, 9, 9, 0]),
        });
        let doc = encode_image(&image, "").unwrap();
        assert_eq!(doc.palette, vec!["#00aa00", "#111111", "#cc0000"]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_encode_fully_transparent_has_empty_palette() {
        let image = RgbaImage::from_pixel(16, 16, Rgba([50, 60, 70, 0]));
        let doc = encode_image(&image, "").unwrap();
        assert!(doc.palette.is_empty());
        assert!(doc.grid.iter().flatten().all(|t| t == TRANSPARENT_TOKEN));
    }

    #[test]
    fn test_encode_row_major() {
        let mut image = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        image.put_pixel(3, 7, Rgba([1, 2, 3, 255]));
        let doc = encode_image(&image, "").unwrap();
        assert_eq!(doc.grid[7][3], "#010203");
        assert_eq!(doc.grid[3][7], TRANSPARENT_TOKEN);
    }

    #[test]
    fn test_encode_wrong_size() {
        for (w, h) in [(15, 16), (16, 17), (32, 32), (1, 1)] {
            let image = RgbaImage::new(w, h);
            let err = encode_image(&image, "").unwrap_err();
            assert!(
                matches!(err, GridError::DimensionMismatch { expected: (16, 16), actual } if actual == (w, h))
            );
        }
    }
}
