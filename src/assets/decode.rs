use std::path::Path;

use anyhow::Context;
use image::RgbImage;

use crate::foundation::color::ColorMatrix;
use crate::foundation::error::{BlockpyrError, BlockpyrResult};

/// Convert an interleaved B,G,R 8-bit buffer of `height` rows by `width` columns.
///
/// Byte 2 of each pixel becomes channel 0 (red), byte 1 channel 1 (green) and byte 0
/// channel 2 (blue).
pub fn color_matrix_from_bgr8(
    width: u32,
    height: u32,
    bgr: &[u8],
) -> BlockpyrResult<ColorMatrix> {
    let expected_len = pixel_buffer_len(width, height)?;
    if bgr.len() != expected_len {
        return Err(BlockpyrError::validation(format!(
            "bgr8 buffer has {} bytes, expected width*height*3 = {expected_len}",
            bgr.len()
        )));
    }
    Ok(from_interleaved(width, height, bgr, [2, 1, 0]))
}

/// Inverse of [`color_matrix_from_bgr8`]: clamp to `[0, 255]`, truncate, interleave as B,G,R.
pub fn color_matrix_to_bgr8(image: &ColorMatrix) -> Vec<u8> {
    to_interleaved(image, [2, 1, 0])
}

/// Convert an `image` crate RGB buffer, keeping channel roles (R -> 0, G -> 1, B -> 2).
pub fn from_rgb_image(img: &RgbImage) -> ColorMatrix {
    let (width, height) = img.dimensions();
    from_interleaved(width, height, img.as_raw(), [0, 1, 2])
}

/// Clamp and truncate into an `image` crate RGB buffer.
pub fn to_rgb_image(image: &ColorMatrix) -> BlockpyrResult<RgbImage> {
    let (rows, cols) = image.shape();
    let width = u32::try_from(cols)
        .map_err(|_| BlockpyrError::validation("image width exceeds u32"))?;
    let height = u32::try_from(rows)
        .map_err(|_| BlockpyrError::validation("image height exceeds u32"))?;
    RgbImage::from_raw(width, height, to_interleaved(image, [0, 1, 2]))
        .ok_or_else(|| BlockpyrError::validation("rgb buffer does not match image dimensions"))
}

/// Decode encoded image bytes (any format the `image` crate reads) into a [`ColorMatrix`].
pub fn decode_image(bytes: &[u8]) -> BlockpyrResult<ColorMatrix> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(from_rgb_image(&dyn_img.to_rgb8()))
}

/// Open and decode the image file at `path`.
pub fn load_image(path: impl AsRef<Path>) -> BlockpyrResult<ColorMatrix> {
    let path = path.as_ref();
    let dyn_img =
        image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(from_rgb_image(&dyn_img.to_rgb8()))
}

/// Encode as PNG at `path`, creating parent directories as needed.
pub fn save_png(image: &ColorMatrix, path: impl AsRef<Path>) -> BlockpyrResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    to_rgb_image(image)?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn pixel_buffer_len(width: u32, height: u32) -> BlockpyrResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| BlockpyrError::validation("pixel buffer size overflow"))
}

// `order[c]` is the byte offset inside a pixel that feeds channel `c`.
fn from_interleaved(width: u32, height: u32, px: &[u8], order: [usize; 3]) -> ColorMatrix {
    let (rows, cols) = (height as usize, width as usize);
    let mut out = ColorMatrix::new(rows, cols);
    for (plane, &offset) in out.channels_mut().iter_mut().zip(order.iter()) {
        for (dst, pixel) in plane.as_mut_slice().iter_mut().zip(px.chunks_exact(3)) {
            *dst = f64::from(pixel[offset]);
        }
    }
    out
}

fn to_interleaved(image: &ColorMatrix, order: [usize; 3]) -> Vec<u8> {
    let len = image.rows() * image.cols();
    let mut out = vec![0u8; len * 3];
    for (plane, &offset) in image.channels().iter().zip(order.iter()) {
        for (pixel, &v) in out.chunks_exact_mut(3).zip(plane.as_slice()) {
            pixel[offset] = to_u8(v);
        }
    }
    out
}

fn to_u8(v: f64) -> u8 {
    // NaN saturates to 0 through the cast.
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
