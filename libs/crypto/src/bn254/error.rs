//! Errors of the bn254 hash-to-curve and point-encoding operations.

/// Error type for generating and interacting with bn254 points.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The try-and-increment search exhausted its one-byte counter space
    /// without finding a valid x coordinate. With a sound digest function
    /// this is statistically unreachable.
    #[error("no valid curve point found within the attempt bound")]
    PointNotFound,
    /// The byte buffer has the wrong size for the point type.
    #[error("invalid encoding length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required buffer size in bytes.
        expected: usize,
        /// Received buffer size in bytes.
        got: usize,
    },
    /// A coordinate word is not a canonical field element (value >= q).
    #[error("coordinate is not a canonical field element")]
    InvalidCoordinate,
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
    /// The all-zero buffer encodes the point at infinity, which has no
    /// affine representation.
    #[error("the point at infinity cannot be encoded")]
    InvalidInfinityPoint,
}
