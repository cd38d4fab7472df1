use std::ops::{Deref, Index, IndexMut};

use crate::foundation::error::{BlockpyrError, BlockpyrResult};
use crate::foundation::matrix::Matrix;

/// Number of channels carried by a [`ColorMatrix`].
pub const CHANNELS: usize = 3;

/// Three equal-shaped [`Matrix`] planes: red (0), green (1) and blue (2).
///
/// The channels are private so the shared-shape invariant cannot be broken from outside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorMatrix {
    channels: [Matrix; CHANNELS],
}

impl ColorMatrix {
    /// Three zero channels of `rows x cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            channels: [
                Matrix::new(rows, cols),
                Matrix::new(rows, cols),
                Matrix::new(rows, cols),
            ],
        }
    }

    /// Assemble from three planes of identical shape.
    pub fn from_channels(red: Matrix, green: Matrix, blue: Matrix) -> BlockpyrResult<Self> {
        for other in [&green, &blue] {
            if other.shape() != red.shape() {
                return Err(BlockpyrError::dimension_mismatch(
                    "from_channels",
                    red.shape(),
                    other.shape(),
                ));
            }
        }
        Ok(Self {
            channels: [red, green, blue],
        })
    }

    /// Row count shared by all channels.
    pub fn rows(&self) -> usize {
        self.channels[0].rows()
    }

    /// Column count shared by all channels.
    pub fn cols(&self) -> usize {
        self.channels[0].cols()
    }

    /// `(rows, cols)` shared by all channels.
    pub fn shape(&self) -> (usize, usize) {
        self.channels[0].shape()
    }

    /// Plane `idx`, or [`BlockpyrError::InvalidChannel`] past blue.
    pub fn channel(&self, idx: usize) -> BlockpyrResult<&Matrix> {
        self.channels
            .get(idx)
            .ok_or(BlockpyrError::InvalidChannel(idx))
    }

    /// Writable view of one plane. Elements can be written, the plane cannot be replaced.
    pub fn channel_mut(&mut self, idx: usize) -> BlockpyrResult<ChannelMut<'_>> {
        self.channels
            .get_mut(idx)
            .map(|plane| ChannelMut { plane })
            .ok_or(BlockpyrError::InvalidChannel(idx))
    }

    pub(crate) fn channels_mut(&mut self) -> &mut [Matrix; CHANNELS] {
        &mut self.channels
    }

    /// Channel 0.
    pub fn red(&self) -> &Matrix {
        &self.channels[0]
    }

    /// Channel 1.
    pub fn green(&self) -> &Matrix {
        &self.channels[1]
    }

    /// Channel 2.
    pub fn blue(&self) -> &Matrix {
        &self.channels[2]
    }

    /// All three planes in channel order.
    pub fn channels(&self) -> &[Matrix; CHANNELS] {
        &self.channels
    }

    /// Consume into the three planes.
    pub fn into_channels(self) -> [Matrix; CHANNELS] {
        self.channels
    }

    /// Move the contents out, leaving three empty channels behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Per-channel elementwise sum.
    pub fn add(&self, other: &Self) -> BlockpyrResult<Self> {
        self.zip_channels("add", other, Matrix::add)
    }

    /// Per-channel elementwise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> BlockpyrResult<Self> {
        self.zip_channels("subtract", other, Matrix::subtract)
    }

    /// Per-channel Hadamard product.
    pub fn multiply_elementwise(&self, other: &Self) -> BlockpyrResult<Self> {
        self.zip_channels("multiply_elementwise", other, Matrix::multiply_elementwise)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map_channels(|m| m.scale(scalar))
    }

    /// Divide every element by `scalar`.
    pub fn divide(&self, scalar: f64) -> Self {
        self.map_channels(|m| m.divide(scalar))
    }

    /// Apply `f` to every element of every channel.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        self.map_channels(|m| m.map(&f))
    }

    fn map_channels(&self, f: impl Fn(&Matrix) -> Matrix) -> Self {
        Self {
            channels: [
                f(&self.channels[0]),
                f(&self.channels[1]),
                f(&self.channels[2]),
            ],
        }
    }

    fn zip_channels(
        &self,
        op: &'static str,
        other: &Self,
        f: impl Fn(&Matrix, &Matrix) -> BlockpyrResult<Matrix>,
    ) -> BlockpyrResult<Self> {
        if self.shape() != other.shape() {
            return Err(BlockpyrError::dimension_mismatch(
                op,
                self.shape(),
                other.shape(),
            ));
        }
        Ok(Self {
            channels: [
                f(&self.channels[0], &other.channels[0])?,
                f(&self.channels[1], &other.channels[1])?,
                f(&self.channels[2], &other.channels[2])?,
            ],
        })
    }
}

/// Element-writable view of one [`ColorMatrix`] channel.
///
/// Reads go through [`Deref`] to the underlying [`Matrix`]; writes go through indexing or
/// [`ChannelMut::as_mut_slice`]. The shape cannot change through this view.
pub struct ChannelMut<'a> {
    plane: &'a mut Matrix,
}

impl ChannelMut<'_> {
    /// Row-major elements of the plane.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.plane.as_mut_slice()
    }
}

impl Deref for ChannelMut<'_> {
    type Target = Matrix;

    fn deref(&self) -> &Matrix {
        self.plane
    }
}

impl<I> Index<I> for ChannelMut<'_>
where
    Matrix: Index<I>,
{
    type Output = <Matrix as Index<I>>::Output;

    fn index(&self, idx: I) -> &Self::Output {
        &self.plane[idx]
    }
}

impl<I> IndexMut<I> for ChannelMut<'_>
where
    Matrix: IndexMut<I>,
{
    fn index_mut(&mut self, idx: I) -> &mut Self::Output {
        &mut self.plane[idx]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
