//! Greedy nearest-neighbour construction.

use qaop_core::{DistanceMatrix, Tour};

use super::{ConstructionError, TourConstructor};

/// Factor applied to distances before they are compared as integers.
pub const DEFAULT_COST_SCALE: f64 = 100.0;

/// Extend the path to the cheapest unvisited node until all are placed.
///
/// Arc costs are compared as `(distance * cost_scale).round()` integers, so
/// distances closer than `1 / cost_scale` nautical miles tie. Ties go to the
/// lowest position. Non-finite distances are treated as missing arcs. A
/// non-finite or non-positive `cost_scale` falls back to
/// [`DEFAULT_COST_SCALE`]. The
/// scaled costs only steer the search; KPIs are summed from raw distances.
///
/// # Examples
/// ```
/// use qaop_core::DistanceMatrix;
/// use qaop_solver::{CheapestArcConstructor, TourConstructor};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 1.0],
///     vec![5.0, 0.0, 2.0],
///     vec![1.0, 2.0, 0.0],
/// ])?;
/// let tour = CheapestArcConstructor::default().construct(&matrix, 0)?;
/// assert_eq!(tour.positions(), &[0, 2, 1, 0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheapestArcConstructor {
    /// Distance multiplier used for integer arc costs.
    pub cost_scale: f64,
}

impl Default for CheapestArcConstructor {
    fn default() -> Self {
        Self {
            cost_scale: DEFAULT_COST_SCALE,
        }
    }
}

impl CheapestArcConstructor {
    /// Construct with an explicit cost scale.
    ///
    /// NaN, infinite, zero, and negative scales are replaced by
    /// [`DEFAULT_COST_SCALE`].
    #[must_use]
    pub const fn new(cost_scale: f64) -> Self {
        Self {
            cost_scale: usable_scale(cost_scale),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "arc costs scale floating-point distances"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scaled distances are far below i64::MAX and rounded first"
    )]
    fn arc_cost(&self, distance: f64) -> Option<i64> {
        distance
            .is_finite()
            .then(|| (distance * usable_scale(self.cost_scale)).round() as i64)
    }

    fn cheapest_unvisited(
        &self,
        matrix: &DistanceMatrix,
        from: usize,
        visited: &[bool],
    ) -> Option<usize> {
        let row = matrix.row(from)?;
        row.iter()
            .zip(visited)
            .enumerate()
            .filter(|(_, (_, seen))| !**seen)
            .filter_map(|(position, (&distance, _))| {
                self.arc_cost(distance).map(|cost| (cost, position))
            })
            .min()
            .map(|(_, position)| position)
    }
}

// The field is public, so the fallback is applied again at use.
const fn usable_scale(cost_scale: f64) -> f64 {
    if cost_scale.is_finite() && cost_scale > 0.0 {
        cost_scale
    } else {
        DEFAULT_COST_SCALE
    }
}

fn mark_visited(visited: &mut [bool], position: usize) {
    if let Some(slot) = visited.get_mut(position) {
        *slot = true;
    }
}

impl TourConstructor for CheapestArcConstructor {
    fn construct(&self, matrix: &DistanceMatrix, start: usize) -> Result<Tour, ConstructionError> {
        let node_count = matrix.len();
        if node_count == 0 {
            return Err(ConstructionError::EmptyMatrix);
        }
        if start >= node_count {
            return Err(ConstructionError::StartOutOfRange {
                start,
                size: node_count,
            });
        }

        let mut visited = vec![false; node_count];
        let mut positions = Vec::with_capacity(node_count + 1);
        mark_visited(&mut visited, start);
        positions.push(start);
        let mut current = start;
        while positions.len() < node_count {
            let next = self
                .cheapest_unvisited(matrix, current, &visited)
                .ok_or(ConstructionError::Stalled {
                    visited: positions.len(),
                    node_count,
                })?;
            mark_visited(&mut visited, next);
            positions.push(next);
            current = next;
        }
        positions.push(start);

        Tour::new(positions, node_count).map_err(ConstructionError::from)
    }
}
