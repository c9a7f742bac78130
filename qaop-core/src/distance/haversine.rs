//! Great-circle distances on a spherical Earth.

use geo::Coord;

use super::{DistanceError, DistanceMatrix, DistanceModel};
use crate::Node;

/// Sphere radius used for every distance, in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Haversine distance between two coordinates in nautical miles.
///
/// Coordinates follow the `geo` convention: `x` is longitude and `y` is
/// latitude, both in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use qaop_core::haversine_nm;
///
/// let a = Coord { x: -150.0, y: 70.0 };
/// let b = Coord { x: -149.0, y: 71.0 };
/// let d = haversine_nm(a, b);
/// assert!((d - haversine_nm(b, a)).abs() < 1e-9);
/// assert!(d > 60.0 && d < 65.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_nm(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (to.x.to_radians() - from.x.to_radians()) / 2.0;
    let a = (half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_NM * c
}

/// [`DistanceModel`] computing great-circle distances from node coordinates.
///
/// Only the upper triangle is evaluated; the lower triangle mirrors it, so
/// the matrix is exactly symmetric and its diagonal is exactly zero.
///
/// # Examples
/// ```
/// use qaop_core::{DistanceModel, HaversineDistanceModel, Node};
///
/// let nodes = [Node::new(0, 70.0, -150.0), Node::new(1, 70.0, -150.0)];
/// let matrix = HaversineDistanceModel.distance_matrix(&nodes)?;
/// assert_eq!(matrix.get(0, 1), Some(0.0));
/// # Ok::<(), qaop_core::DistanceError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineDistanceModel;

impl DistanceModel for HaversineDistanceModel {
    fn distance_matrix(&self, nodes: &[Node]) -> Result<DistanceMatrix, DistanceError> {
        if nodes.is_empty() {
            return Err(DistanceError::EmptyInput);
        }
        let n = nodes.len();
        let mut rows = vec![vec![0.0; n]; n];
        for (i, from) in nodes.iter().enumerate() {
            for (j, to) in nodes.iter().enumerate().skip(i + 1) {
                let distance = haversine_nm(from.location(), to.location());
                set(&mut rows, i, j, distance);
                set(&mut rows, j, i, distance);
            }
        }
        DistanceMatrix::from_rows(rows)
    }
}

fn set(rows: &mut [Vec<f64>], row: usize, col: usize, value: f64) {
    if let Some(cell) = rows.get_mut(row).and_then(|r| r.get_mut(col)) {
        *cell = value;
    }
}
