use image::{RgbImage, imageops};

use crate::foundation::error::{BlockpyrError, BlockpyrResult};

/// Thumbnail grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GalleryOpts {
    /// Side length of every (square) thumbnail, in pixels.
    pub tile_size: u32,
    /// Thumbnails per grid row.
    pub tiles_per_row: u32,
}

impl Default for GalleryOpts {
    fn default() -> Self {
        Self {
            tile_size: 256,
            tiles_per_row: 5,
        }
    }
}

impl GalleryOpts {
    /// Reject zero tile sizes and zero tiles per row.
    pub fn validate(&self) -> BlockpyrResult<()> {
        if self.tile_size == 0 {
            return Err(BlockpyrError::validation("gallery tile_size must be > 0"));
        }
        if self.tiles_per_row == 0 {
            return Err(BlockpyrError::validation(
                "gallery tiles_per_row must be > 0",
            ));
        }
        Ok(())
    }
}

/// Lay `tiles` out row-major on a black canvas, each resized to `tile_size` squared.
///
/// The last row is padded with black slots.
pub fn compose_gallery(tiles: &[RgbImage], opts: &GalleryOpts) -> BlockpyrResult<RgbImage> {
    opts.validate()?;
    if tiles.is_empty() {
        return Err(BlockpyrError::validation(
            "gallery requires at least one tile",
        ));
    }

    let per_row = opts.tiles_per_row as usize;
    let grid_rows = tiles.len().div_ceil(per_row);
    let width = opts
        .tile_size
        .checked_mul(opts.tiles_per_row)
        .ok_or_else(|| BlockpyrError::validation("gallery width overflow"))?;
    let height = u32::try_from(grid_rows)
        .ok()
        .and_then(|r| r.checked_mul(opts.tile_size))
        .ok_or_else(|| BlockpyrError::validation("gallery height overflow"))?;

    let mut canvas = RgbImage::new(width, height);
    for (i, tile) in tiles.iter().enumerate() {
        let thumb = imageops::resize(
            tile,
            opts.tile_size,
            opts.tile_size,
            imageops::FilterType::Triangle,
        );
        let x = (i % per_row) as i64 * i64::from(opts.tile_size);
        let y = (i / per_row) as i64 * i64::from(opts.tile_size);
        imageops::replace(&mut canvas, &thumb, x, y);
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/gallery.rs"]
mod tests;
