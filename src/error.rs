//! Contract violations reported by [`Vector`][crate::Vector] operations.

use thiserror::Error;

/// A [`Result`][std::result::Result] whose error type defaults to [`VectorError`].
pub type Result<T, E = VectorError> = std::result::Result<T, E>;

/// A precondition of a vector operation was not met.
///
/// These are caller bugs, not numeric failures: division by zero and normalization of a zero vector
/// are *not* reported here, and instead produce IEEE-754 infinities or NaNs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The operation needs both operands to have the same dimension.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the left-hand (or receiving) vector.
        left: usize,
        /// Dimension of the right-hand vector.
        right: usize,
    },

    /// The cross product is only defined for 3-dimensional vectors.
    #[error("cross product requires 3-dimensional vectors, got {dimension}")]
    NotThreeDimensional {
        /// Dimension of both operands.
        dimension: usize,
    },
}

impl VectorError {
    /// Checks that `left` and `right` are equal, logging and returning an error naming `op` if not.
    pub(crate) fn check_dimensions(op: &'static str, left: usize, right: usize) -> Result<()> {
        if left == right {
            Ok(())
        } else {
            log::debug!("{op}: rejecting operands of dimension {left} and {right}");
            Err(Self::DimensionMismatch { left, right })
        }
    }
}
