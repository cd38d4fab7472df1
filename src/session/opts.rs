use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::effects::shrink::{MAX_STRENGTH, Shrinkage};
use crate::foundation::error::{BlockpyrError, BlockpyrResult};
use crate::render::gallery::GalleryOpts;

/// Options controlling a [`crate::DecomposeSession`].
///
/// Every field has a default, so a JSON file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionOpts {
    /// Coarsest blur level. `None` uses `level_count(side)`.
    pub max_level: Option<u32>,
    /// Initial control strength, `0..=100`.
    pub strength: u8,
    /// Rule applied to every layer on recompute.
    pub shrinkage: Shrinkage,
    /// Thumbnail grid layout.
    pub gallery: GalleryOpts,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            max_level: None,
            strength: 3,
            shrinkage: Shrinkage::Hard,
            gallery: GalleryOpts::default(),
            threads: None,
        }
    }
}

impl SessionOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlockpyrResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BlockpyrError::validation(format!("parse session options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BlockpyrResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlockpyrError::validation(format!(
                "open session options JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check strength, gallery layout and thread count.
    pub fn validate(&self) -> BlockpyrResult<()> {
        validate_strength(self.strength)?;
        self.gallery.validate()?;
        if self.threads == Some(0) {
            return Err(BlockpyrError::validation(
                "session 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_strength(strength: u8) -> BlockpyrResult<()> {
    if strength > MAX_STRENGTH {
        return Err(BlockpyrError::validation(format!(
            "strength must be in 0..={MAX_STRENGTH}, got {strength}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
