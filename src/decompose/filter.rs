use crate::foundation::color::ColorMatrix;

/// Apply `pointwise(value, s)` to every element of every channel.
pub fn filter<F>(pointwise: F, image: &ColorMatrix, s: f64) -> ColorMatrix
where
    F: Fn(f64, f64) -> f64,
{
    image.map(|v| pointwise(v, s))
}

#[cfg(test)]
#[path = "../../tests/unit/decompose/filter.rs"]
mod tests;
