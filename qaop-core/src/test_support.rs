//! Test-only fixtures shared by unit and behaviour tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{DistanceError, DistanceMatrix, DistanceModel, Network, Node, NodeId};

/// Three nodes north of Alaska whose single tour is about 252.55 nm long.
#[must_use]
pub fn triangle_network() -> Network {
    Network::from_nodes(vec![
        Node::new(0, 70.0, -150.0),
        Node::new(1, 71.0, -149.0),
        Node::new(2, 72.0, -148.0),
    ])
}

/// `count` nodes spaced half a degree apart along a meridian, ids starting at
/// `first_id`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture coordinates are derived from the node index"
)]
pub fn meridian_network(count: u32, first_id: NodeId) -> Network {
    let nodes = (0..count)
        .map(|i| Node::new(first_id + i64::from(i), 60.0 + f64::from(i) * 0.5, 10.0))
        .collect();
    Network::from_nodes(nodes)
}

/// A [`DistanceModel`] returning a caller-supplied matrix verbatim.
///
/// Lets tests pin exact arc costs, including ties, independent of geometry.
/// The matrix must match the number of nodes passed in.
#[derive(Debug, Clone)]
pub struct FixedMatrixDistanceModel {
    rows: Vec<Vec<f64>>,
}

impl FixedMatrixDistanceModel {
    /// Construct a model from row vectors.
    #[must_use]
    pub const fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}

impl DistanceModel for FixedMatrixDistanceModel {
    fn distance_matrix(&self, nodes: &[Node]) -> Result<DistanceMatrix, DistanceError> {
        if nodes.is_empty() {
            return Err(DistanceError::EmptyInput);
        }
        let matrix = DistanceMatrix::from_rows(self.rows.clone())?;
        if matrix.len() != nodes.len() {
            return Err(DistanceError::OutOfBounds {
                from: 0,
                to: nodes.len().saturating_sub(1),
                size: matrix.len(),
            });
        }
        Ok(matrix)
    }
}
