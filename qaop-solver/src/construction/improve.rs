//! Post-construction improvement.

use qaop_core::{DistanceMatrix, Tour};

/// Refine a constructed tour.
///
/// Implementations must return a tour over the same nodes with the same
/// start.
pub trait TourImprover: Send + Sync {
    /// Return an improved tour, or `tour` itself when nothing changes.
    fn improve(&self, matrix: &DistanceMatrix, tour: Tour) -> Tour;
}

/// Leaves the constructed tour untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoImprovement;

impl TourImprover for NoImprovement {
    fn improve(&self, _matrix: &DistanceMatrix, tour: Tour) -> Tour {
        tour
    }
}
