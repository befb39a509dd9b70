//! Image and document file I/O, and tile output path generation

use image::DynamicImage;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GridError, Result};

/// Infix between the source stem and the tile index in tile file names
pub const TILE_INFIX: &str = "_part_";

/// Open and decode a raster image.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| GridError::image(path, e))
}

/// Save an image, choosing the format from the path's extension.
///
/// Parent directories are created if they don't exist.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    create_parent_dirs(path)?;
    image.save(path).map_err(|e| GridError::image(path, e))
}

/// Write a text file, creating parent directories if needed.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    create_parent_dirs(path)?;
    fs::write(path, contents).map_err(|e| GridError::io(path, e))
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| GridError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Generate the output path for one tile of a split source image.
///
/// # Output Naming Rules
///
/// | Scenario | Output |
/// |----------|--------|
/// | `sprites/hero.png`, tile 2 | `sprites/hero_part_2.png` |
/// | `hero.png` (no directory), tile 0 | `./hero_part_0.png` |
/// | With `out_dir = tiles`, tile 3 | `tiles/hero_part_3.png` |
///
/// Tiles are always written as PNG. The stem is kept byte for byte, so
/// names that aren't valid UTF-8 still map to distinct tiles.
pub fn tile_output_path(input: &Path, index: usize, out_dir: Option<&Path>) -> PathBuf {
    let mut file_name = input.file_stem().unwrap_or(OsStr::new("tile")).to_os_string();
    file_name.push(format!("{}{}.png", TILE_INFIX, index));

    let dir = match out_dir {
        Some(dir) => dir,
        None => match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        },
    };

    dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_tile_output_path_beside_input() {
        let path = tile_output_path(Path::new("sprites/hero.png"), 2, None);
        assert_eq!(path, PathBuf::from("sprites/hero_part_2.png"));
    }

    #[test]
    fn test_tile_output_path_bare_file_name() {
        let path = tile_output_path(Path::new("hero.png"), 0, None);
        assert_eq!(path, PathBuf::from("./hero_part_0.png"));
    }

    #[test]
    fn test_tile_output_path_out_dir() {
        let path = tile_output_path(Path::new("sprites/hero.png"), 15, Some(Path::new("tiles")));
        assert_eq!(path, PathBuf::from("tiles/hero_part_15.png"));
    }

    #[test]
    fn test_tile_output_path_keeps_inner_dots() {
        let path = tile_output_path(Path::new("boss.phase1.png"), 1, None);
        assert_eq!(path, PathBuf::from("./boss.phase1_part_1.png"));
    }

    #[cfg(unix)]
    #[test]
    fn test_tile_output_path_non_utf8_stems_stay_distinct() {
        use std::os::unix::ffi::OsStrExt;

        let a = tile_output_path(Path::new(OsStr::from_bytes(b"sheet\xff.png")), 0, None);
        let b = tile_output_path(Path::new(OsStr::from_bytes(b"sheet\xfe.png")), 0, None);
        assert_ne!(a, b);
        assert_eq!(a.file_name(), Some(OsStr::from_bytes(b"sheet\xff_part_0.png")));
    }

    #[test]
    fn test_save_image_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("deep").join("out.png");
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255])));

        save_image(&image, &path).unwrap();

        let loaded = load_image(&path).unwrap().to_rgba8();
        assert_eq!(*loaded.get_pixel(1, 1), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_load_image_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_image(&temp.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, GridError::Io { .. }), "got {:?}", err);
    }

    #[test]
    fn test_write_text_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("doc.json");
        write_text(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
