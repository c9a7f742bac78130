use thiserror::Error;

/// Errors from [`crate::distance::DistanceModel::distance_matrix`] and matrix
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// No nodes were provided.
    #[error("at least one node is required")]
    EmptyInput,
    /// Matrix rows were not all `n` entries long.
    #[error("row {row} has {len} columns but {expected} expected (matrix must be square)")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
    /// A lookup addressed a position outside the matrix.
    #[error("no distance from position {from} to position {to} in a {size}x{size} matrix")]
    OutOfBounds {
        /// Origin position.
        from: usize,
        /// Destination position.
        to: usize,
        /// Matrix dimension.
        size: usize,
    },
}
