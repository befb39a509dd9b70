//! Sprite sheet splitting - cuts a fixed-size sheet into 16x16 tiles
//!
//! Tiles are visited row-major (top row of tiles first, left to right within
//! a row) and numbered from zero in that order.

use clap::ValueEnum;
use image::{DynamicImage, GenericImageView};
use log::debug;
use std::path::{Path, PathBuf};

use crate::error::{check_dimensions, Result};
use crate::output::{load_image, save_image, tile_output_path};

/// Width and height of every tile
pub const TILE_SIZE: u32 = 16;

/// Supported sheet sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitVariant {
    /// 32x32 sheet, four tiles
    #[value(name = "32")]
    Quad,
    /// 64x64 sheet, sixteen tiles
    #[value(name = "64")]
    Grid4x4,
}

impl SplitVariant {
    /// Required sheet width and height
    pub fn source_size(self) -> u32 {
        match self {
            SplitVariant::Quad => 32,
            SplitVariant::Grid4x4 => 64,
        }
    }

    pub fn tile_size(self) -> u32 {
        TILE_SIZE
    }

    /// Tiles along each edge of the sheet
    pub fn tiles_per_side(self) -> u32 {
        self.source_size() / self.tile_size()
    }

    pub fn tile_count(self) -> usize {
        (self.tiles_per_side() * self.tiles_per_side()) as usize
    }
}

/// Position of one tile within its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOrigin {
    /// Zero-based visitation index
    pub index: usize,
    /// Left edge in sheet pixels
    pub x: u32,
    /// Top edge in sheet pixels
    pub y: u32,
}

/// A cropped tile and where it came from.
#[derive(Debug, Clone)]
pub struct Tile {
    pub origin: TileOrigin,
    pub image: DynamicImage,
}

/// Tile origins for a variant in row-major order.
///
/// # Examples
///
/// ```
/// use spritegrid::split::{tile_origins, SplitVariant};
///
/// let origins: Vec<_> = tile_origins(SplitVariant::Quad).map(|o| (o.x, o.y)).collect();
/// assert_eq!(origins, vec![(0, 0), (16, 0), (0, 16), (16, 16)]);
/// ```
pub fn tile_origins(variant: SplitVariant) -> impl Iterator<Item = TileOrigin> {
    let per_side = variant.tiles_per_side();
    let tile = variant.tile_size();
    (0..per_side * per_side).map(move |i| TileOrigin {
        index: i as usize,
        x: (i % per_side) * tile,
        y: (i / per_side) * tile,
    })
}

/// Crop a sheet into tiles.
///
/// The sheet must be exactly the variant's source size. Tiles keep the
/// sheet's color type.
pub fn split_image(image: &DynamicImage, variant: SplitVariant) -> Result<Vec<Tile>> {
    let size = variant.source_size();
    check_dimensions(image.dimensions(), (size, size))?;

    let tile = variant.tile_size();
    Ok(tile_origins(variant)
        .map(|origin| Tile { origin, image: image.crop_imm(origin.x, origin.y, tile, tile) })
        .collect())
}

/// Split a sheet file into tile files.
///
/// Tiles are named `<stem>_part_<index>.png` and written beside the input,
/// or into `out_dir` when given. `on_saved` is called after each tile is
/// written. The size check happens before any file is written; a failure
/// while writing leaves earlier tiles in place.
pub fn split_file<F>(
    input: &Path,
    variant: SplitVariant,
    out_dir: Option<&Path>,
    mut on_saved: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&TileOrigin, &Path),
{
    let image = load_image(input)?;
    debug!("decoded {} ({}x{})", input.display(), image.width(), image.height());

    let tiles = split_image(&image, variant)?;
    let mut written = Vec::with_capacity(variant.tile_count());

    for tile in &tiles {
        let path = tile_output_path(input, tile.origin.index, out_dir);
        save_image(&tile.image, &path)?;
        on_saved(&tile.origin, &path);
        written.push(path);
    }

    Ok(written)
}
