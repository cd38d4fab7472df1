use image::RgbImage;

use crate::assets::decode::to_rgb_image;
use crate::decompose::filter::filter;
use crate::decompose::reconstruct::reconstruct;
use crate::decompose::series::series;
use crate::effects::blur::{block_blur, level_count};
use crate::effects::shrink::layer_threshold;
use crate::foundation::color::ColorMatrix;
use crate::foundation::error::{BlockpyrError, BlockpyrResult};
use crate::render::gallery::compose_gallery;
use crate::session::opts::{SessionOpts, validate_strength};

/// Outputs of one recompute at a given control strength.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionFrame {
    /// Strength the frame was computed with.
    pub strength: u8,
    /// Decomposition layers after shrinkage, in sequence order.
    pub layers: Vec<ColorMatrix>,
    /// Sum of `layers`.
    pub reconstruction: ColorMatrix,
}

/// Explicit context for interactive decomposition.
///
/// A session decomposes its source once, then re-runs filter + reconstruct whenever the
/// control strength changes. A failed recompute leaves the previous frame in place.
pub struct DecomposeSession {
    source: ColorMatrix,
    layers: Vec<ColorMatrix>,
    max_level: u32,
    opts: SessionOpts,
    pool: rayon::ThreadPool,
    frame: SessionFrame,
}

impl DecomposeSession {
    /// Decompose `source` and compute the first frame at `opts.strength`.
    #[tracing::instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
    pub fn new(source: ColorMatrix, opts: SessionOpts) -> BlockpyrResult<Self> {
        opts.validate()?;
        let pool = build_thread_pool(opts.threads)?;
        let max_level = opts
            .max_level
            .unwrap_or_else(|| level_count(source.rows()));
        let layers = pool.install(|| series(block_blur, &source, max_level))?;
        let frame = pool.install(|| compute_frame(&layers, &opts, opts.strength))?;
        tracing::debug!(max_level, layers = layers.len(), "session ready");
        Ok(Self {
            source,
            layers,
            max_level,
            opts,
            pool,
            frame,
        })
    }

    /// Recompute filtered layers and reconstruction for a new control strength.
    #[tracing::instrument(skip(self))]
    pub fn set_strength(&mut self, strength: u8) -> BlockpyrResult<&SessionFrame> {
        let next = self
            .pool
            .install(|| compute_frame(&self.layers, &self.opts, strength));
        match next {
            Ok(frame) => {
                self.frame = frame;
                Ok(&self.frame)
            }
            Err(e) => {
                tracing::warn!(strength, error = %e, "recompute failed, keeping previous frame");
                Err(e)
            }
        }
    }

    /// Image the session was built from.
    pub fn source(&self) -> &ColorMatrix {
        &self.source
    }

    /// Unfiltered decomposition of the source.
    pub fn layers(&self) -> &[ColorMatrix] {
        &self.layers
    }

    /// Most recent successfully computed frame.
    pub fn frame(&self) -> &SessionFrame {
        &self.frame
    }

    /// Coarsest blur level used by the decomposition.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Options the session was built with.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    /// Thumbnail grid: filtered layers, then the source, then the reconstruction.
    pub fn gallery(&self) -> BlockpyrResult<RgbImage> {
        let tiles = self
            .frame
            .layers
            .iter()
            .chain([&self.source, &self.frame.reconstruction])
            .map(to_rgb_image)
            .collect::<BlockpyrResult<Vec<_>>>()?;
        compose_gallery(&tiles, &self.opts.gallery)
    }
}

fn compute_frame(
    layers: &[ColorMatrix],
    opts: &SessionOpts,
    strength: u8,
) -> BlockpyrResult<SessionFrame> {
    validate_strength(strength)?;
    let rule = opts.shrinkage;
    let filtered: Vec<ColorMatrix> = layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            filter(|v, t| rule.apply(v, t), layer, layer_threshold(strength, i + 1))
        })
        .collect();
    let reconstruction = reconstruct(&filtered)?;
    Ok(SessionFrame {
        strength,
        layers: filtered,
        reconstruction,
    })
}

fn build_thread_pool(threads: Option<usize>) -> BlockpyrResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        BlockpyrError::validation(format!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/decompose_session.rs"]
mod tests;
