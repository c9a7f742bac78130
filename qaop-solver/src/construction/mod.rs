//! Tour construction and improvement seams.

use qaop_core::{DistanceMatrix, Tour, TourError};
use thiserror::Error;

mod cheapest_arc;
mod improve;

pub use cheapest_arc::{CheapestArcConstructor, DEFAULT_COST_SCALE};
pub use improve::{NoImprovement, TourImprover};

/// Reasons a constructor could not produce a tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The matrix had no rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,
    /// The start position does not name a node.
    #[error("start position {start} is outside a matrix of size {size}")]
    StartOutOfRange {
        /// Requested start.
        start: usize,
        /// Matrix dimension.
        size: usize,
    },
    /// No finite arc leads from the path end to an unvisited node.
    #[error("stalled after visiting {visited} of {node_count} nodes")]
    Stalled {
        /// Nodes placed before stalling.
        visited: usize,
        /// Nodes to place.
        node_count: usize,
    },
    /// The assembled sequence was not a closed tour.
    #[error("constructed sequence is not a tour: {0}")]
    Tour(#[from] TourError),
}

/// Build a closed tour over every row of a distance matrix.
pub trait TourConstructor: Send + Sync {
    /// Construct a tour that starts and ends at `start`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when the matrix is empty, `start` is
    /// out of range, or not every node can be placed.
    fn construct(&self, matrix: &DistanceMatrix, start: usize) -> Result<Tour, ConstructionError>;
}
