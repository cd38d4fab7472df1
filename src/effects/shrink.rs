/// Largest accepted control strength.
pub const MAX_STRENGTH: u8 = 100;

/// Pointwise shrinkage rule applied to detail layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shrinkage {
    /// Zero values whose magnitude does not exceed the threshold.
    #[default]
    Hard,
    /// Pull every value toward zero by the threshold, clamping at zero.
    Soft,
    /// Pass values through.
    None,
}

impl Shrinkage {
    /// Apply this rule to `x` at `threshold`.
    pub fn apply(self, x: f64, threshold: f64) -> f64 {
        match self {
            Self::Hard => hard_threshold(x, threshold),
            Self::Soft => soft_threshold(x, threshold),
            Self::None => x,
        }
    }
}

/// Keep `x` when `|x| > threshold`, otherwise 0.
pub fn hard_threshold(x: f64, threshold: f64) -> f64 {
    if x.abs() > threshold { x } else { 0.0 }
}

/// Shrink `x` toward 0 by `threshold`, clamping at 0.
pub fn soft_threshold(x: f64, threshold: f64) -> f64 {
    let mag = x.abs() - threshold;
    if mag > 0.0 { mag.copysign(x) } else { 0.0 }
}

/// Threshold for the layer at 1-based `position` in a decomposition sequence:
/// `position * sqrt(strength * 0.1)`.
pub fn layer_threshold(strength: u8, position: usize) -> f64 {
    position as f64 * (f64::from(strength) * 0.1).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shrink.rs"]
mod tests;
