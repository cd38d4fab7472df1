/// Convenience result type used across blockpyr.
pub type BlockpyrResult<T> = Result<T, BlockpyrError>;

/// Top-level error taxonomy used by the matrix types, the pipeline and the session.
#[derive(thiserror::Error, Debug)]
pub enum BlockpyrError {
    /// Operands of a binary or structural operation have incompatible shapes.
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// Operation that rejected its operands.
        op: &'static str,
        /// `(rows, cols)` of the left operand.
        lhs: (usize, usize),
        /// `(rows, cols)` of the right operand.
        rhs: (usize, usize),
    },

    /// Image shape is not accepted by the blur operator.
    #[error("shape error: {0}")]
    Shape(String),

    /// Blur level outside `0..=log2(side)`.
    #[error("level {level} out of range 0..={max}")]
    LevelOutOfRange {
        /// Requested level.
        level: u32,
        /// Largest accepted level for the image.
        max: u32,
    },

    /// Channel index other than 0, 1 or 2.
    #[error("invalid channel {0}, expected 0, 1 or 2")]
    InvalidChannel(usize),

    /// Reconstruction was asked to sum zero layers.
    #[error("cannot reconstruct from an empty layer sequence")]
    EmptySequence,

    /// Invalid user-provided data (options, buffers, control values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlockpyrError {
    /// Build a [`BlockpyrError::DimensionMismatch`] value.
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }

    /// Build a [`BlockpyrError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`BlockpyrError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
