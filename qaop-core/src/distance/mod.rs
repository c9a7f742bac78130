//! Pairwise distances between network nodes.
//!
//! The [`DistanceModel`] trait turns a slice of [`Node`](crate::Node)s into a
//! square [`DistanceMatrix`] of nautical miles indexed by node position. The
//! default model is [`HaversineDistanceModel`], a great-circle computation on
//! a sphere of radius [`EARTH_RADIUS_NM`].

mod error;
mod haversine;
mod matrix;

pub use error::DistanceError;
pub use haversine::{EARTH_RADIUS_NM, HaversineDistanceModel, haversine_nm};
pub use matrix::DistanceMatrix;

use crate::Node;

/// Produce a distance matrix for an ordered node list.
///
/// Implementers must return an `n×n` matrix where `n == nodes.len()` and
/// `matrix.get(i, j)` is the distance from `nodes[i]` to `nodes[j]`.
///
/// # Examples
///
/// ```rust
/// use qaop_core::{DistanceError, DistanceMatrix, DistanceModel, Node};
///
/// struct UnitModel;
///
/// impl DistanceModel for UnitModel {
///     fn distance_matrix(&self, nodes: &[Node]) -> Result<DistanceMatrix, DistanceError> {
///         if nodes.is_empty() {
///             return Err(DistanceError::EmptyInput);
///         }
///         let n = nodes.len();
///         let rows = (0..n)
///             .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
///             .collect();
///         DistanceMatrix::from_rows(rows)
///     }
/// }
///
/// let matrix = UnitModel.distance_matrix(&[Node::new(1, 0.0, 0.0)])?;
/// assert_eq!(matrix.len(), 1);
/// # Ok::<(), DistanceError>(())
/// ```
pub trait DistanceModel: Send + Sync {
    /// Return the distance matrix for `nodes`.
    ///
    /// Implementations must return `Err(DistanceError::EmptyInput)` when
    /// `nodes` is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`DistanceError`] when no matrix can be built.
    fn distance_matrix(&self, nodes: &[Node]) -> Result<DistanceMatrix, DistanceError>;
}
