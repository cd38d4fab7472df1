use crate::foundation::color::ColorMatrix;
use crate::foundation::error::BlockpyrResult;

/// Split `image` into `max_level + 2` layers that sum back to it.
///
/// Starting from `X = image`, each level from `max_level` down to 0 pushes
/// `blur(X, level)` and subtracts it from `X`; the remainder is pushed last. Index 0 is
/// therefore the coarsest block-mean layer. Errors from `blur` are returned unchanged.
#[tracing::instrument(skip(blur, image), fields(rows = image.rows(), cols = image.cols()))]
pub fn series<F>(
    blur: F,
    image: &ColorMatrix,
    max_level: u32,
) -> BlockpyrResult<Vec<ColorMatrix>>
where
    F: Fn(&ColorMatrix, u32) -> BlockpyrResult<ColorMatrix>,
{
    let mut layers = Vec::new();
    let mut residual = image.clone();
    for level in (0..=max_level).rev() {
        let blurred = blur(&residual, level)?;
        residual = residual.subtract(&blurred)?;
        tracing::debug!(level, "captured layer");
        layers.push(blurred);
    }
    layers.push(residual);
    Ok(layers)
}

#[cfg(test)]
#[path = "../../tests/unit/decompose/series.rs"]
mod tests;
