//! Color tokens for pixel grids
//!
//! A token is either the transparent sentinel `#00000000` or a lowercase
//! `#rrggbb` string. Alpha is binary: a pixel with zero alpha becomes the
//! sentinel, any other alpha is dropped and only the RGB channels are kept.

use image::Rgba;
use thiserror::Error;

/// Token written for fully transparent pixels
pub const TRANSPARENT_TOKEN: &str = "#00000000";

/// Pixel value the transparent token decodes to
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Error type for color token parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Token was an empty string
    #[error("empty color token")]
    Empty,
    /// Token doesn't start with '#'
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    /// Wrong number of hex digits (6, or the 8-digit transparent sentinel)
    #[error("color '{token}' has {len} hex digits, expected 6 or the transparent token #00000000")]
    InvalidLength { token: String, len: usize },
    /// Contains non-hex characters
    #[error("invalid hex character '{ch}' in color '{token}'")]
    InvalidHex { token: String, ch: char },
}

/// Convert a pixel to its color token.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use spritegrid::color::pixel_to_token;
///
/// assert_eq!(pixel_to_token(Rgba([255, 128, 0, 255])), "#ff8000");
/// // Partial alpha is treated as opaque
/// assert_eq!(pixel_to_token(Rgba([255, 128, 0, 10])), "#ff8000");
/// assert_eq!(pixel_to_token(Rgba([255, 128, 0, 0])), "#00000000");
/// ```
pub fn pixel_to_token(pixel: Rgba<u8>) -> String {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        TRANSPARENT_TOKEN.to_string()
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Whether a token is the transparent sentinel (hex case is ignored).
pub fn is_transparent_token(token: &str) -> bool {
    token.eq_ignore_ascii_case(TRANSPARENT_TOKEN)
}

/// Parse a color token back into a pixel.
///
/// `#rrggbb` (either hex case) decodes to an opaque pixel and the sentinel
/// decodes to [`TRANSPARENT`]. Any other 8-digit form is rejected, since
/// encoded grids never carry partial alpha.
pub fn parse_token(token: &str) -> Result<Rgba<u8>, ColorError> {
    if token.is_empty() {
        return Err(ColorError::Empty);
    }

    let hex = token.strip_prefix('#').ok_or_else(|| ColorError::MissingHash(token.to_string()))?;

    if let Some(ch) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex { token: token.to_string(), ch });
    }

    match hex.len() {
        6 => {
            let bytes = hex.as_bytes();
            Ok(Rgba([
                hex_byte(bytes[0], bytes[1]),
                hex_byte(bytes[2], bytes[3]),
                hex_byte(bytes[4], bytes[5]),
                255,
            ]))
        }
        8 if is_transparent_token(token) => Ok(TRANSPARENT),
        len => Err(ColorError::InvalidLength { token: token.to_string(), len }),
    }
}

/// Combine two ASCII hex digits (already validated) into a byte.
fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_nibble(hi) << 4) | hex_nibble(lo)
}

fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}
