//! JSON grid to PNG decoding
//!
//! The inverse of [`crate::encode`]: each token becomes one pixel, with the
//! transparent token mapped to zero alpha and hex colors mapped to full alpha.

use image::{DynamicImage, RgbaImage};
use log::debug;
use std::fs;
use std::path::Path;

use crate::color::parse_token;
use crate::document::GridDocument;
use crate::error::{GridError, Result};
use crate::output::save_image;

/// Render a grid document into an image.
///
/// The document is validated first, so a successful result always has the
/// document's width and height.
pub fn decode_document(document: &GridDocument) -> Result<RgbaImage> {
    document.validate()?;

    let mut image = RgbaImage::new(document.width, document.height);
    for (y, row) in document.grid.iter().enumerate() {
        for (x, token) in row.iter().enumerate() {
            let pixel = parse_token(token)
                .map_err(|source| GridError::InvalidToken { row: y, col: x, source })?;
            image.put_pixel(x as u32, y as u32, pixel);
        }
    }

    Ok(image)
}

/// Load a grid document from a JSON file.
pub fn read_document(path: &Path) -> Result<GridDocument> {
    let contents = fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
    GridDocument::from_json(&contents).map_err(|e| GridError::json(path, e))
}

/// Read a JSON document and write it out as an image.
pub fn decode_file(input: &Path, output: &Path) -> Result<GridDocument> {
    let document = read_document(input)?;
    let image = decode_document(&document)?;
    debug!("decoded {} into {}x{} image", input.display(), image.width(), image.height());

    save_image(&DynamicImage::ImageRgba8(image), output)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorError, TRANSPARENT_TOKEN};
    use crate::encode::encode_image;
    use image::Rgba;

    #[test]
    fn test_decode_maps_tokens() {
        let doc = GridDocument::from_grid(
            "",
            vec![
                vec!["#ff0000".to_string(), TRANSPARENT_TOKEN.to_string()],
                vec!["#0000FF".to_string(), "#ff0000".to_string()],
            ],
        );
        let image = decode_document(&doc).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(*image.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*image.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*image.get_pixel(0, 1), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_decode_reports_bad_token_position() {
        let doc = GridDocument::from_grid("", vec![vec!["#000000".to_string(), "red".to_string()]]);
        let err = decode_document(&doc).unwrap_err();
        match err {
            GridError::InvalidToken { row, col, source } => {
                assert_eq!((row, col), (0, 1));
                assert_eq!(source, ColorError::MissingHash("red".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_invalid_shape() {
        let mut doc = GridDocument::from_grid("", vec![vec!["#000000".to_string()]]);
        doc.width = 2;
        assert!(matches!(decode_document(&doc), Err(GridError::InvalidDocument(_))));
    }

    #[test]
    fn test_round_trip_binary_alpha() {
        let original = RgbaImage::from_fn(16, 16, |x, y| {
            let a = match (x + y) % 3 {
                0 => 0,
                1 => 255,
                _ => 40,
            };
            Rgba([(x * 16) as u8, (y * 16) as u8, (x ^ y) as u8, a])
        });

        let doc = encode_image(&original, "round trip").unwrap();
        let decoded = decode_document(&doc).unwrap();

        for (x, y, px) in original.enumerate_pixels() {
            let expected =
                if px[3] == 0 { Rgba([0, 0, 0, 0]) } else { Rgba([px[0], px[1], px[2], 255]) };
            assert_eq!(*decoded.get_pixel(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}
