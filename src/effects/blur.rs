use rayon::prelude::*;

use crate::foundation::color::ColorMatrix;
use crate::foundation::error::{BlockpyrError, BlockpyrResult};
use crate::foundation::matrix::Matrix;

/// Smallest `k` with `2^k >= side`; 0 for `side <= 1`.
pub fn level_count(side: usize) -> u32 {
    let mut span = 1usize;
    let mut k = 0u32;
    while span < side {
        span <<= 1;
        k += 1;
    }
    k
}

/// Replace every `2^level x 2^level` block of every channel by its mean.
///
/// The image must be square with a power-of-two side and `level <= log2(side)`.
/// Level 0 returns the input unchanged. Bands of blocks are averaged in parallel; the
/// per-block summation order is fixed, so the output is deterministic.
pub fn block_blur(image: &ColorMatrix, level: u32) -> BlockpyrResult<ColorMatrix> {
    let (rows, cols) = image.shape();
    if rows != cols {
        return Err(BlockpyrError::shape(format!(
            "block blur expects a square image, got {rows}x{cols}"
        )));
    }
    if !rows.is_power_of_two() {
        return Err(BlockpyrError::shape(format!(
            "block blur expects a power-of-two side, got {rows}"
        )));
    }
    let max = rows.trailing_zeros();
    if level > max {
        return Err(BlockpyrError::LevelOutOfRange { level, max });
    }

    let step = 1usize << level;
    let [r, g, b] = image.channels();
    ColorMatrix::from_channels(
        block_mean_plane(r, step),
        block_mean_plane(g, step),
        block_mean_plane(b, step),
    )
}

fn block_mean_plane(src: &Matrix, step: usize) -> Matrix {
    let n = src.cols();
    let area = (step * step) as f64;
    let mut out = Matrix::new(src.rows(), n);
    let src = src.as_slice();

    out.as_mut_slice()
        .par_chunks_mut(step * n)
        .enumerate()
        .for_each(|(band, dst)| {
            let row0 = band * step;
            for col0 in (0..n).step_by(step) {
                let mut sum = 0.0;
                for y in 0..step {
                    let base = (row0 + y) * n + col0;
                    for &v in &src[base..base + step] {
                        sum += v;
                    }
                }
                let mean = sum / area;
                for y in 0..step {
                    let base = y * n + col0;
                    dst[base..base + step].fill(mean);
                }
            }
        });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
