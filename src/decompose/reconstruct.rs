use crate::foundation::color::ColorMatrix;
use crate::foundation::error::{BlockpyrError, BlockpyrResult};

/// Sum a layer sequence back into one image, folding from the last layer toward the first.
///
/// Fails with [`BlockpyrError::EmptySequence`] when `layers` is empty and with
/// [`BlockpyrError::DimensionMismatch`] when layer shapes disagree.
pub fn reconstruct(layers: &[ColorMatrix]) -> BlockpyrResult<ColorMatrix> {
    let (last, rest) = layers.split_last().ok_or(BlockpyrError::EmptySequence)?;
    rest.iter()
        .rev()
        .try_fold(last.clone(), |acc, layer| acc.add(layer))
}

#[cfg(test)]
#[path = "../../tests/unit/decompose/reconstruct.rs"]
mod tests;
