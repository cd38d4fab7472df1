//! blockpyr splits a colour image into dyadic block-average detail layers, attenuates each
//! layer with a pointwise shrinkage rule and sums the layers back into an image.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: pixels -> [`ColorMatrix`] ([`decode_image`], [`color_matrix_from_bgr8`])
//! 2. **Decompose**: [`series`] with [`block_blur`] -> `max_level + 2` layers
//! 3. **Filter**: [`filter`] each layer with a [`Shrinkage`] rule at [`layer_threshold`]
//! 4. **Reconstruct**: [`reconstruct`] sums the layers; without filtering this returns the
//!    input up to floating-point rounding
//!
//! [`DecomposeSession`] keeps the decomposition of one image and recomputes steps 3-4
//! whenever the control strength changes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod decompose;
mod effects;
mod foundation;
mod render;
mod session;

pub use assets::decode::{
    color_matrix_from_bgr8, color_matrix_to_bgr8, decode_image, from_rgb_image, load_image,
    save_png, to_rgb_image,
};
pub use decompose::filter::filter;
pub use decompose::reconstruct::reconstruct;
pub use decompose::series::series;
pub use effects::blur::{block_blur, level_count};
pub use effects::shrink::{
    MAX_STRENGTH, Shrinkage, hard_threshold, layer_threshold, soft_threshold,
};
pub use foundation::color::{CHANNELS, ChannelMut, ColorMatrix};
pub use foundation::error::{BlockpyrError, BlockpyrResult};
pub use foundation::matrix::Matrix;
pub use render::gallery::{GalleryOpts, compose_gallery};
pub use session::decompose_session::{DecomposeSession, SessionFrame};
pub use session::opts::SessionOpts;
